use alloc::{string::String, sync::Arc, vec, vec::Vec};
use std::sync::Mutex;

use super::*;
use crate::{event::ChangeAction, test_support::RecordingNotifier};

#[test]
fn default_constructor_initializes_empty() {
  let stack: ObservableStack<String> = ObservableStack::new();
  assert_eq!(stack.len(), 0);
  assert!(stack.try_peek().is_none());
}

#[test]
fn constructor_copies_collection() {
  let source = vec!["i1", "i2"];
  let stack: ObservableStack<&str> = source.iter().copied().collect();
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.peek(), Ok(&"i2"));
  assert!(stack.contains(&"i1"));
  assert!(!stack.contains(&"i3"));
}

#[test]
fn pop_on_empty_violates_precondition_without_event() {
  let mut stack: ObservableStack<u32, RecordingNotifier<u32>> = ObservableStack::new();
  assert_eq!(stack.pop(), Err(CollectionError::PreconditionViolated));
  assert_eq!(stack.peek(), Err(CollectionError::PreconditionViolated));
  assert!(stack.notifier().events().is_empty());
}

#[test]
fn push_and_pop_emit_single_item_events() {
  let mut stack: ObservableStack<&str, RecordingNotifier<&str>> = ObservableStack::new();
  stack.push("Foo");
  stack.push("Bar");
  assert_eq!(stack.pop(), Ok("Bar"));
  assert_eq!(
    stack.notifier().events(),
    vec![ChangeEvent::Added(vec!["Foo"]), ChangeEvent::Added(vec!["Bar"]), ChangeEvent::Removed(vec!["Bar"])]
  );
}

#[test]
fn clear_emits_reset_only_for_non_empty_stack() {
  let mut stack: ObservableStack<u32, RecordingNotifier<u32>> = ObservableStack::new();
  stack.clear();
  assert!(stack.notifier().events().is_empty());
  stack.push(1);
  stack.clear();
  let actions: Vec<_> = stack.notifier().events().iter().map(ChangeEvent::action).collect();
  assert_eq!(actions, vec![ChangeAction::Add, ChangeAction::Reset]);
}

#[test]
fn registry_subscription_receives_events_until_dropped() {
  let mut stack: ObservableStack<u32> = ObservableStack::new();
  let received = Arc::new(Mutex::new(Vec::new()));
  let sink = received.clone();
  let subscription = stack.subscribe(ChangeListener::new(move |event: &ChangeEvent<u32>| {
    sink.lock().unwrap().push(event.clone());
  }));
  assert_eq!(stack.listener_count(), 1);

  stack.push(1);
  drop(subscription);
  stack.push(2);
  assert_eq!(received.lock().unwrap().as_slice(), &[ChangeEvent::Added(vec![1])]);
  assert_eq!(stack.listener_count(), 0);
}

#[test]
fn to_vec_copy_to_and_round_trip() {
  let stack: ObservableStack<u32> = (1..=3).collect();
  assert_eq!(stack.to_vec(), vec![3, 2, 1]);
  let rebuilt: ObservableStack<u32> = ObservableStack::from_vec(stack.to_vec());
  assert_eq!(rebuilt.iter().collect::<Vec<_>>(), vec![3, 2, 1]);

  let mut destination = [0_u32; 3];
  assert!(stack.copy_to(&mut destination, 1).is_err());
  assert_eq!(destination, [0; 3]);
  stack.copy_to(&mut destination, 0).unwrap();
  assert_eq!(destination, [3, 2, 1]);
}

#[test]
fn trim_excess_keeps_contents() {
  let mut stack: ObservableStack<u32, RecordingNotifier<u32>> = ObservableStack::with_capacity(64);
  stack.push(1);
  stack.trim_excess();
  assert_eq!(stack.to_vec(), vec![1]);
  assert_eq!(stack.notifier().events().len(), 1);
}
