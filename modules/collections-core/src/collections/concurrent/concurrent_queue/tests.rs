use alloc::{vec, vec::Vec};

use super::*;

type Queue<T> = ConcurrentQueue<T>;

#[test]
fn enqueue_dequeue_is_fifo() {
  let queue: Queue<u32> = Queue::new();
  queue.enqueue(1);
  queue.enqueue(2);
  assert_eq!(queue.len(), 2);
  assert_eq!(queue.try_peek(), Some(1));
  assert_eq!(queue.try_dequeue(), Some(1));
  assert_eq!(queue.try_dequeue(), Some(2));
  assert_eq!(queue.try_dequeue(), None);
  assert_eq!(queue.try_peek(), None);
}

#[test]
fn enqueue_range_preserves_input_order() {
  let queue: Queue<&str> = Queue::new();
  queue.enqueue_range(&["a", "b", "c"]);
  assert_eq!(queue.to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn enqueue_range_at_rejects_bad_window_without_mutation() {
  let queue: Queue<u32> = Queue::new();
  assert!(queue.enqueue_range_at(&[1, 2], 1, 2).is_err());
  assert!(queue.is_empty());
  queue.enqueue_range_at(&[1, 2, 3], 1, 2).unwrap();
  assert_eq!(queue.to_vec(), vec![2, 3]);
}

#[test]
fn try_dequeue_range_writes_oldest_first() {
  let queue: Queue<u32> = (1..=2).collect();
  let mut buffer = [0_u32; 3];
  assert_eq!(queue.try_dequeue_range(&mut buffer), 2);
  assert_eq!(buffer, [1, 2, 0]);
  assert_eq!(queue.try_dequeue_range(&mut buffer), 0);
}

#[test]
fn try_dequeue_range_at_fills_the_window() {
  let queue: Queue<u32> = (1..=4).collect();
  let mut buffer = [0_u32; 4];
  assert_eq!(queue.try_dequeue_range_at(&mut buffer, 1, 2).unwrap(), 2);
  assert_eq!(buffer, [0, 1, 2, 0]);
  assert_eq!(queue.len(), 2);
}

#[test]
fn clear_and_round_trip() {
  let queue: Queue<u32> = (1..=3).collect();
  let copy: Queue<u32> = Queue::from_vec(queue.to_vec());
  assert_eq!(copy.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
  assert_eq!(queue.clear(), 3);
  assert_eq!(queue.clear(), 0);
  assert_eq!(copy.into_vec(), vec![1, 2, 3]);
}

#[test]
fn copy_to_rejects_start_past_end() {
  let queue: Queue<u32> = Queue::new();
  let mut destination = [7_u32; 9];
  assert!(queue.copy_to(&mut destination, 10).is_err());
  queue.copy_to(&mut destination, 9).unwrap();
  assert_eq!(destination, [7; 9]);
}
