use alloc::vec::Vec;
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


/// Thread-safe LIFO buffer.
///
/// The top of the stack is the last element of the guarded `Vec`. Elements removed by `clear`
/// and the range pops are dropped or handed out only after the lock has been released.
pub struct ConcurrentStack<T, M = SpinSyncMutex<Vec<T>>> {
  buffer: M,
  len:    AtomicUsize,
  _pd:    PhantomData<fn() -> T>,
}

impl<T, M> ConcurrentStack<T, M>
where
  M: SyncMutexLike<Vec<T>>,
{
  /// Creates an empty stack.
  #[must_use]
  pub fn new() -> Self {
    Self::from_buffer(Vec::new())
  }

  /// Creates an empty stack with room for `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self::from_buffer(Vec::with_capacity(capacity))
  }

  /// Creates a stack from elements listed top-first, the order produced by
  /// [`ConcurrentStack::to_vec`].
  #[must_use]
  pub fn from_vec(mut items: Vec<T>) -> Self {
    items.reverse();
    Self::from_buffer(items)
  }

  fn from_buffer(buffer: Vec<T>) -> Self {
    let len = buffer.len();
    Self { buffer: M::new(buffer), len: AtomicUsize::new(len), _pd: PhantomData }
  }

  fn with_read<R>(&self, f: impl FnOnce(&Vec<T>) -> R) -> R {
    let guard = self.buffer.lock();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
    let mut guard = self.buffer.lock();
    let result = f(&mut guard);
    self.len.store(guard.len(), Ordering::Release);
    result
  }

  /// Pushes `item` onto the top of the stack.
  pub fn push(&self, item: T) {
    self.with_write(|buffer| buffer.push(item));
  }

  /// Pushes every element of `items` in one critical section.
  ///
  /// The last element of `items` ends up on top, so subsequent pops yield them in reverse.
  pub fn push_vec(&self, items: Vec<T>) {
    if items.is_empty() {
      return;
    }
    self.with_write(|buffer| buffer.extend(items));
  }

  /// Pushes a copy of `items` in one critical section. See [`ConcurrentStack::push_vec`].
  pub fn push_range(&self, items: &[T])
  where
    T: Clone, {
    self.push_vec(items.to_vec());
  }

  /// Pushes `items[offset..offset + count]` in one critical section.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `items`. The
  /// stack is left unchanged.
  pub fn push_range_at(&self, items: &[T], offset: usize, count: usize) -> Result<(), CollectionError>
  where
    T: Clone, {
    let window = validate_range(items.len(), offset, count)?;
    self.push_range(&items[window]);
    Ok(())
  }

  /// Removes and returns the top element, or `None` if the stack is empty.
  pub fn try_pop(&self) -> Option<T> {
    self.with_write(Vec::pop)
  }

  /// Returns a copy of the top element without removing it.
  #[must_use]
  pub fn try_peek(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|buffer| buffer.last().cloned())
  }

  /// Removes up to `max` elements in one critical section and returns them top-first.
  pub fn try_pop_many(&self, max: usize) -> Vec<T> {
    if max == 0 {
      return Vec::new();
    }
    self.with_write(|buffer| {
      let start = buffer.len().saturating_sub(max);
      let mut popped = buffer.split_off(start);
      popped.reverse();
      popped
    })
  }

  /// Removes up to `buffer.len()` elements, writing them top-first into `buffer`.
  ///
  /// Returns the number of elements removed, `0` if the stack was empty.
  pub fn try_pop_range(&self, buffer: &mut [T]) -> usize {
    let popped = self.try_pop_many(buffer.len());
    let count = popped.len();
    for (slot, item) in buffer.iter_mut().zip(popped) {
      *slot = item;
    }
    count
  }

  /// Removes up to `count` elements, writing them top-first into `buffer[offset..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `buffer`. Nothing
  /// is removed in that case.
  pub fn try_pop_range_at(&self, buffer: &mut [T], offset: usize, count: usize) -> Result<usize, CollectionError> {
    let window = validate_range(buffer.len(), offset, count)?;
    Ok(self.try_pop_range(&mut buffer[window]))
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

  /// Returns `true` if the stack holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Point-in-time copy of the elements, top-first.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.with_read(|buffer| buffer.iter().rev().cloned().collect())
  }

  /// Copies the elements top-first into `destination[start_index..]`.
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

  /// One-shot iterator over a copy of the elements, top-first.
  #[must_use]
  pub fn iter(&self) -> Snapshot<T>
  where
    T: Clone, {
    Snapshot::new(self.to_vec())
  }

  /// Consumes the stack and returns its elements top-first.
  #[must_use]
  pub fn into_vec(self) -> Vec<T> {
    let mut items = self.buffer.into_inner();
    items.reverse();
    items
  }
}

impl<T, M> Default for ConcurrentStack<T, M>
where
  M: SyncMutexLike<Vec<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

/// Pushes the elements in iteration order: the last element becomes the top.
impl<T, M> FromIterator<T> for ConcurrentStack<T, M>
where
  M: SyncMutexLike<Vec<T>>,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_buffer(iter.into_iter().collect())
  }
}

impl<T, M> fmt::Debug for ConcurrentStack<T, M>
where
  M: SyncMutexLike<Vec<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConcurrentStack").field("len", &self.len()).finish()
  }
}
