use alloc::{collections::VecDeque, vec::Vec};
use core::{fmt, marker::PhantomData, mem};

use portable_atomic::{AtomicUsize, Ordering};

use crate::{
  collections::{
    range::{validate_copy, validate_range},
    Snapshot,
  },
  error::CollectionError,
  sync::{SpinSyncMutex, SyncMutexLike},
};

#[cfg(test)]
mod tests;

/// Thread-safe FIFO buffer.
///
/// The head of the queue is the front of the guarded `VecDeque`.
pub struct ConcurrentQueue<T, M = SpinSyncMutex<VecDeque<T>>> {
  buffer: M,
  len:    AtomicUsize,
  _pd:    PhantomData<fn() -> T>,
}

impl<T, M> ConcurrentQueue<T, M>
where
  M: SyncMutexLike<VecDeque<T>>,
{
  /// Creates an empty queue.
  #[must_use]
  pub fn new() -> Self {
    Self::from_buffer(VecDeque::new())
  }

  /// Creates an empty queue with room for `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self::from_buffer(VecDeque::with_capacity(capacity))
  }

  /// Creates a queue from elements listed front-first.
  #[must_use]
  pub fn from_vec(items: Vec<T>) -> Self {
    Self::from_buffer(VecDeque::from(items))
  }

  fn from_buffer(buffer: VecDeque<T>) -> Self {
    let len = buffer.len();
    Self { buffer: M::new(buffer), len: AtomicUsize::new(len), _pd: PhantomData }
  }

  fn with_read<R>(&self, f: impl FnOnce(&VecDeque<T>) -> R) -> R {
    let guard = self.buffer.lock();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut VecDeque<T>) -> R) -> R {
    let mut guard = self.buffer.lock();
    let result = f(&mut guard);
    self.len.store(guard.len(), Ordering::Release);
    result
  }

  /// Appends `item` at the tail.
  pub fn enqueue(&self, item: T) {
    self.with_write(|buffer| buffer.push_back(item));
  }

  /// Appends every element of `items`, in order, in one critical section.
  pub fn enqueue_vec(&self, items: Vec<T>) {
    if items.is_empty() {
      return;
    }
    self.with_write(|buffer| buffer.extend(items));
  }

  /// Appends a copy of `items`, in order, in one critical section.
  pub fn enqueue_range(&self, items: &[T])
  where
    T: Clone, {
    self.enqueue_vec(items.to_vec());
  }

  /// Appends `items[offset..offset + count]` in one critical section.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `items`. The
  /// queue is left unchanged.
  pub fn enqueue_range_at(&self, items: &[T], offset: usize, count: usize) -> Result<(), CollectionError>
  where
    T: Clone, {
    let window = validate_range(items.len(), offset, count)?;
    self.enqueue_range(&items[window]);
    Ok(())
  }

  /// Removes and returns the head, or `None` if the queue is empty.
  pub fn try_dequeue(&self) -> Option<T> {
    self.with_write(VecDeque::pop_front)
  }

  /// Returns a copy of the head without removing it.
  #[must_use]
  pub fn try_peek(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|buffer| buffer.front().cloned())
  }

  /// Removes up to `max` elements in one critical section and returns them oldest-first.
  pub fn try_dequeue_many(&self, max: usize) -> Vec<T> {
    if max == 0 {
      return Vec::new();
    }
    self.with_write(|buffer| {
      let end = buffer.len().min(max);
      buffer.drain(..end).collect()
    })
  }

  /// Removes up to `buffer.len()` elements, writing them oldest-first into `buffer`.
  ///
  /// Returns the number of elements removed, `0` if the queue was empty.
  pub fn try_dequeue_range(&self, buffer: &mut [T]) -> usize {
    let dequeued = self.try_dequeue_many(buffer.len());
    let count = dequeued.len();
    for (slot, item) in buffer.iter_mut().zip(dequeued) {
      *slot = item;
    }
    count
  }

  /// Removes up to `count` elements, writing them oldest-first into `buffer[offset..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `buffer`. Nothing
  /// is removed in that case.
  pub fn try_dequeue_range_at(&self, buffer: &mut [T], offset: usize, count: usize) -> Result<usize, CollectionError> {
    let window = validate_range(buffer.len(), offset, count)?;
    Ok(self.try_dequeue_range(&mut buffer[window]))
  }

  /// Removes every element and returns how many were removed by this call.
  pub fn clear(&self) -> usize {
    let drained = self.with_write(mem::take);
    drained.len()
  }

  /// Number of elements, read without taking the lock.
  #[must_use]
  pub fn len(&self) -> usize {
    self.len.load(Ordering::Acquire)
  }

  /// Returns `true` if the queue holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Point-in-time copy of the elements, front-first.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.with_read(|buffer| buffer.iter().cloned().collect())
  }

  /// Copies the elements front-first into `destination[start_index..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if `start_index` is past the end of
  /// `destination` or if the remaining slots cannot hold every element. `destination` is not
  /// touched in that case.
  pub fn copy_to(&self, destination: &mut [T], start_index: usize) -> Result<(), CollectionError>
  where
    T: Clone, {
    let items = self.to_vec();
    let window = validate_copy(destination.len(), start_index, items.len())?;
    for (slot, item) in destination[window].iter_mut().zip(items) {
      *slot = item;
    }
    Ok(())
  }

  /// One-shot iterator over a copy of the elements, front-first.
  #[must_use]
  pub fn iter(&self) -> Snapshot<T>
  where
    T: Clone, {
    Snapshot::new(self.to_vec())
  }

  /// Consumes the queue and returns its elements front-first.
  #[must_use]
  pub fn into_vec(self) -> Vec<T> {
    self.buffer.into_inner().into()
  }
}

impl<T, M> Default for ConcurrentQueue<T, M>
where
  M: SyncMutexLike<VecDeque<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, M> FromIterator<T> for ConcurrentQueue<T, M>
where
  M: SyncMutexLike<VecDeque<T>>,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_buffer(iter.into_iter().collect())
  }
}

impl<T, M> fmt::Debug for ConcurrentQueue<T, M>
where
  M: SyncMutexLike<VecDeque<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConcurrentQueue").field("len", &self.len()).finish()
  }
}
