use alloc::{vec, vec::Vec};

use super::*;

#[test]
fn empty_batches_produce_no_event() {
  assert!(ChangeEvent::<u32>::added(Vec::new()).is_none());
  assert!(ChangeEvent::<u32>::removed(Vec::new()).is_none());
}

#[test]
fn batch_events_keep_order_and_action() {
  let added = ChangeEvent::added(vec!["a", "b", "c"]).unwrap();
  assert_eq!(added.action(), ChangeAction::Add);
  assert_eq!(added.items(), &["a", "b", "c"]);

  let removed = ChangeEvent::removed(vec![3, 2]).unwrap();
  assert_eq!(removed.action(), ChangeAction::Remove);
  assert_eq!(removed.len(), 2);
  assert_eq!(removed.into_items(), vec![3, 2]);
}

#[test]
fn reset_carries_nothing() {
  let reset = ChangeEvent::<u32>::Reset;
  assert_eq!(reset.action(), ChangeAction::Reset);
  assert!(reset.is_empty());
  assert!(reset.into_items().is_empty());
}

#[test]
fn single_item_constructors() {
  assert_eq!(ChangeEvent::added_item(1), ChangeEvent::Added(vec![1]));
  assert_eq!(ChangeEvent::removed_item(1), ChangeEvent::Removed(vec![1]));
}
