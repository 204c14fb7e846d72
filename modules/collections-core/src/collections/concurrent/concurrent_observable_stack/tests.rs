use alloc::{string::String, sync::Arc, vec, vec::Vec};
use std::{
  collections::HashSet,
  panic::{self, AssertUnwindSafe},
  sync::{Barrier, Mutex},
  thread,
};

use super::*;
use crate::{event::ChangeAction, observer::NoopNotifier, test_support::RecordingNotifier};

type RecordingStack<T> = ConcurrentObservableStack<T, SpinSyncMutex<Vec<T>>, RecordingNotifier<T>>;

#[test]
fn default_stack_is_empty() {
  let stack: ConcurrentObservableStack<String> = ConcurrentObservableStack::new();
  assert_eq!(stack.len(), 0);
  assert!(stack.is_empty());
  assert_eq!(stack.listener_count(), 0);
}

#[test]
fn construction_copies_the_source_without_events() {
  let source = vec![String::from("i1"), String::from("i2")];
  let stack: RecordingStack<String> = source.iter().cloned().collect();
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.try_peek().as_deref(), Some("i2"));
  assert!(stack.notifier().events().is_empty());
}

#[test]
fn each_push_emits_one_single_item_event_in_order() {
  let stack: RecordingStack<&str> = ConcurrentObservableStack::new();
  stack.push("Foo");
  stack.push("Bar");
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.notifier().events(), vec![ChangeEvent::Added(vec!["Foo"]), ChangeEvent::Added(vec!["Bar"])]);
}

#[test]
fn push_range_emits_one_event_and_pops_reversed() {
  let stack: RecordingStack<char> = ConcurrentObservableStack::new();
  stack.push_range(&['a', 'b', 'c']);
  assert_eq!(stack.notifier().events(), vec![ChangeEvent::Added(vec!['a', 'b', 'c'])]);
  assert_eq!(stack.try_pop(), Some('c'));
  assert_eq!(stack.try_pop(), Some('b'));
  assert_eq!(stack.try_pop(), Some('a'));
  assert_eq!(stack.notifier().events().len(), 4);
}

#[test]
fn push_range_at_emits_only_the_window() {
  let stack: RecordingStack<&str> = ConcurrentObservableStack::new();
  stack.push_range_at(&["Foo1", "Foo2", "Foo3", "Foo4"], 2, 2).unwrap();
  stack.push_range_at(&["Bar1", "Bar2", "Bar3", "Bar4"], 2, 2).unwrap();
  assert_eq!(stack.len(), 4);
  assert_eq!(
    stack.notifier().events(),
    vec![ChangeEvent::Added(vec!["Foo3", "Foo4"]), ChangeEvent::Added(vec!["Bar3", "Bar4"])]
  );
}

#[test]
fn empty_ranges_and_rejected_windows_emit_nothing() {
  let stack: RecordingStack<u32> = ConcurrentObservableStack::new();
  stack.push_range(&[]);
  stack.push_range_at(&[1, 2, 3], 1, 0).unwrap();
  assert!(stack.push_range_at(&[1, 2, 3], 2, 5).is_err());
  let mut buffer = [0_u32; 2];
  assert!(stack.try_pop_range_at(&mut buffer, 3, 1).is_err());
  assert!(stack.is_empty());
  assert!(stack.notifier().events().is_empty());
}

#[test]
fn try_pop_on_empty_returns_none_silently() {
  let stack: RecordingStack<u32> = ConcurrentObservableStack::new();
  assert_eq!(stack.try_pop(), None);
  assert_eq!(stack.try_peek(), None);
  assert!(stack.notifier().events().is_empty());
}

#[test]
fn try_pop_range_reports_true_count_and_one_event() {
  let stack: RecordingStack<&str> = ["hello", "world"].into_iter().collect();
  let mut buffer = [""; 3];
  assert_eq!(stack.try_pop_range(&mut buffer), 2);
  assert_eq!(buffer, ["world", "hello", ""]);
  assert_eq!(stack.notifier().events(), vec![ChangeEvent::Removed(vec!["world", "hello"])]);

  assert_eq!(stack.try_pop_range(&mut buffer), 0);
  assert_eq!(stack.notifier().events().len(), 1);
}

#[test]
fn try_pop_range_at_reports_the_popped_window() {
  let stack: RecordingStack<&str> = ["hello", "brave", "new", "world"].into_iter().collect();
  let mut buffer = [""; 4];
  assert_eq!(stack.try_pop_range_at(&mut buffer, 2, 2).unwrap(), 2);
  assert_eq!(stack.notifier().events(), vec![ChangeEvent::Removed(vec!["world", "new"])]);

  let stack: RecordingStack<&str> = ["i1", "i2"].into_iter().collect();
  assert_eq!(stack.try_pop_range_at(&mut buffer, 1, 3).unwrap(), 2);
}

#[test]
fn clear_emits_reset_only_when_something_was_removed() {
  let stack: RecordingStack<u32> = ConcurrentObservableStack::new();
  stack.clear();
  assert!(stack.notifier().events().is_empty());

  stack.push_range(&[1, 2]);
  stack.clear();
  assert_eq!(stack.len(), 0);
  let events = stack.notifier().events();
  assert_eq!(events.len(), 2);
  assert_eq!(events[1].action(), ChangeAction::Reset);
}

#[test]
fn round_trip_through_to_vec_preserves_iteration_order() {
  let stack: ConcurrentObservableStack<u32, SpinSyncMutex<Vec<u32>>, NoopNotifier> = (1..=5).collect();
  let rebuilt: ConcurrentObservableStack<u32, SpinSyncMutex<Vec<u32>>, NoopNotifier> =
    ConcurrentObservableStack::from_vec(stack.to_vec());
  assert_eq!(rebuilt.len(), stack.len());
  assert_eq!((&rebuilt).into_iter().collect::<Vec<_>>(), stack.iter().collect::<Vec<_>>());
}

#[test]
fn copy_to_rejects_short_destination_untouched() {
  let stack: RecordingStack<u32> = (1..=3).collect();
  let mut destination = [9_u32; 3];
  assert!(stack.copy_to(&mut destination, 1).is_err());
  assert_eq!(destination, [9; 3]);
  stack.copy_to(&mut destination, 0).unwrap();
  assert_eq!(destination, [3, 2, 1]);
}

#[test]
fn registry_listeners_see_state_already_applied() {
  let stack: Arc<ConcurrentObservableStack<u32>> = Arc::new(ConcurrentObservableStack::new());
  let seen_len = Arc::new(Mutex::new(Vec::new()));

  let observed = Arc::downgrade(&stack);
  let seen = seen_len.clone();
  let subscription = stack.subscribe(ChangeListener::new(move |_| {
    if let Some(stack) = observed.upgrade() {
      seen.lock().unwrap().push(stack.len());
    }
  }));

  stack.push(1);
  stack.push_range(&[2, 3]);
  let _ = stack.try_pop();
  stack.clear();
  assert_eq!(seen_len.lock().unwrap().as_slice(), &[1, 3, 2, 0]);

  drop(subscription);
  stack.push(4);
  assert_eq!(seen_len.lock().unwrap().len(), 4);
}

#[test]
fn listener_may_mutate_the_stack_it_observes() {
  let stack: Arc<ConcurrentObservableStack<u32>> = Arc::new(ConcurrentObservableStack::new());
  let observed = Arc::downgrade(&stack);
  let _subscription = stack.subscribe(ChangeListener::new(move |event: &ChangeEvent<u32>| {
    if let (Some(stack), ChangeEvent::Added(items)) = (observed.upgrade(), event) {
      if items.as_slice() == [1] {
        stack.push(2);
      }
    }
  }));

  stack.push(1);
  assert_eq!(stack.to_vec(), vec![2, 1]);
}

#[test]
fn spin_backed_stack_counts_every_concurrent_push_and_pop() {
  const THREADS: usize = 16;
  let stack: ConcurrentObservableStack<usize> = ConcurrentObservableStack::with_capacity(THREADS);
  let events = Arc::new(Mutex::new(Vec::new()));
  let sink = events.clone();
  let _subscription = stack.subscribe(ChangeListener::new(move |event: &ChangeEvent<usize>| {
    sink.lock().unwrap().push(event.clone());
  }));
  let barrier = Barrier::new(THREADS);

  let popped: Vec<usize> = thread::scope(|scope| {
    let handles: Vec<_> = (0..THREADS)
      .map(|index| {
        let stack = &stack;
        let barrier = &barrier;
        scope.spawn(move || {
          barrier.wait();
          stack.push(index);
          stack.try_pop()
        })
      })
      .collect();
    handles.into_iter().map(|handle| handle.join().unwrap().unwrap()).collect()
  });

  assert!(stack.is_empty());
  let popped: HashSet<usize> = popped.into_iter().collect();
  assert_eq!(popped, (0..THREADS).collect::<HashSet<_>>());

  let events = events.lock().unwrap();
  assert_eq!(events.len(), THREADS * 2);
  assert!(events.iter().all(|event| event.len() == 1));
  assert_eq!(events.iter().filter(|event| event.action() == ChangeAction::Add).count(), THREADS);
  assert_eq!(events.iter().filter(|event| event.action() == ChangeAction::Remove).count(), THREADS);
}

#[derive(Debug, PartialEq)]
struct CloneBomb(u32);

impl Clone for CloneBomb {
  #[allow(clippy::panic)]
  fn clone(&self) -> Self {
    if self.0 == 13 {
      panic!("refusing to clone 13");
    }
    CloneBomb(self.0)
  }
}

#[test]
fn failing_clone_leaves_range_push_unapplied() {
  let stack: RecordingStack<CloneBomb> = ConcurrentObservableStack::new();
  stack.push(CloneBomb(1));

  let result = panic::catch_unwind(AssertUnwindSafe(|| stack.push_range(&[CloneBomb(2), CloneBomb(13)])));

  assert!(result.is_err());
  assert_eq!(stack.len(), 1);
  assert_eq!(stack.to_vec(), vec![CloneBomb(1)]);
  assert_eq!(stack.notifier().events().len(), 1);
  stack.push(CloneBomb(3));
  assert_eq!(stack.len(), 2);
}
