use alloc::vec::Vec;
use core::fmt;

use super::ConcurrentStack;
use crate::{
  collections::{range::validate_range, Snapshot},
  error::CollectionError,
  event::ChangeEvent,
  observer::{ChangeListener, ChangeNotifier, ListenerEntries, ListenerId, ObserverRegistry, Subscription},
  sync::{SpinSyncMutex, SyncMutexLike},
};

#[cfg(test)]
mod tests;

/// Thread-safe LIFO collection that reports every mutation to a [`ChangeNotifier`].
///
/// Each accepted mutation produces exactly one [`ChangeEvent`], delivered synchronously on the
/// mutating thread after the change is visible through [`len`](Self::len) and
/// [`to_vec`](Self::to_vec), and after the internal lock has been released. Operations that do
/// not change the contents (an empty range, a pop or clear on an empty stack) emit nothing.
///
/// A panicking observer unwinds through the mutating call; the mutation itself stays committed.
pub struct ConcurrentObservableStack<T, M = SpinSyncMutex<Vec<T>>, N = ObserverRegistry<T>> {
  stack:    ConcurrentStack<T, M>,
  notifier: N,
}

impl<T, M, N> ConcurrentObservableStack<T, M, N>
where
  T: Clone,
  M: SyncMutexLike<Vec<T>>,
  N: ChangeNotifier<T>,
{
  /// Creates an empty stack with a default notifier.
  #[must_use]
  pub fn new() -> Self
  where
    N: Default, {
    Self::with_notifier(N::default())
  }

  /// Creates an empty stack with room for `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self
  where
    N: Default, {
    Self { stack: ConcurrentStack::with_capacity(capacity), notifier: N::default() }
  }

  /// Creates an empty stack reporting to `notifier`.
  #[must_use]
  pub fn with_notifier(notifier: N) -> Self {
    Self { stack: ConcurrentStack::new(), notifier }
  }

  /// Creates a stack from elements listed top-first, the order produced by
  /// [`to_vec`](Self::to_vec). No event is emitted.
  #[must_use]
  pub fn from_vec(items: Vec<T>) -> Self
  where
    N: Default, {
    Self { stack: ConcurrentStack::from_vec(items), notifier: N::default() }
  }

  /// Notifier receiving this stack's events.
  #[must_use]
  pub const fn notifier(&self) -> &N {
    &self.notifier
  }

  fn emit(&self, event: ChangeEvent<T>) {
    tracing::trace!(action = ?event.action(), items = event.len(), "stack changed");
    self.notifier.notify(&event);
  }

  /// Pushes `item` and emits `Added([item])`.
  pub fn push(&self, item: T) {
    self.stack.push(item.clone());
    self.emit(ChangeEvent::added_item(item));
  }

  /// Pushes `items` atomically and emits one `Added` event carrying them in input order.
  ///
  /// Subsequent pops yield the elements in reverse input order. An empty slice emits nothing.
  pub fn push_range(&self, items: &[T]) {
    let added = items.to_vec();
    self.stack.push_range(items);
    if let Some(event) = ChangeEvent::added(added) {
      self.emit(event);
    }
  }

  /// Pushes `items[offset..offset + count]` atomically. See [`push_range`](Self::push_range).
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `items`. The
  /// stack is unchanged and nothing is emitted.
  pub fn push_range_at(&self, items: &[T], offset: usize, count: usize) -> Result<(), CollectionError> {
    let window = validate_range(items.len(), offset, count)?;
    self.push_range(&items[window]);
    Ok(())
  }

  /// Pops the top element and emits `Removed([item])`. Returns `None`, silently, when empty.
  pub fn try_pop(&self) -> Option<T> {
    let item = self.stack.try_pop()?;
    self.emit(ChangeEvent::removed_item(item.clone()));
    Some(item)
  }

  /// Returns a copy of the top element without removing it.
  #[must_use]
  pub fn try_peek(&self) -> Option<T> {
    self.stack.try_peek()
  }

  /// Pops up to `buffer.len()` elements atomically, writing them top-first into `buffer`.
  ///
  /// Emits one `Removed` event carrying the popped elements top-first, unless nothing was
  /// popped. Returns the number of elements popped.
  pub fn try_pop_range(&self, buffer: &mut [T]) -> usize {
    let popped = self.stack.try_pop_many(buffer.len());
    let count = popped.len();
    for (slot, item) in buffer.iter_mut().zip(popped.iter().cloned()) {
      *slot = item;
    }
    if let Some(event) = ChangeEvent::removed(popped) {
      self.emit(event);
    }
    count
  }

  /// Pops up to `count` elements atomically into `buffer[offset..]`. See
  /// [`try_pop_range`](Self::try_pop_range).
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `buffer`. Nothing
  /// is popped or emitted in that case.
  pub fn try_pop_range_at(&self, buffer: &mut [T], offset: usize, count: usize) -> Result<usize, CollectionError> {
    let window = validate_range(buffer.len(), offset, count)?;
    Ok(self.try_pop_range(&mut buffer[window]))
  }

  /// Removes every element. Emits `Reset` only if this call removed something.
  pub fn clear(&self) {
    if self.stack.clear() > 0 {
      self.emit(ChangeEvent::Reset);
    }
  }

  /// Number of elements, read without taking the lock.
  #[must_use]
  pub fn len(&self) -> usize {
    self.stack.len()
  }

  /// Returns `true` if the stack holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.stack.is_empty()
  }

  /// Point-in-time copy of the elements, top-first.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.stack.to_vec()
  }

  /// Copies the elements top-first into `destination[start_index..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if `start_index` is past the end of
  /// `destination` or if the remaining slots cannot hold every element.
  pub fn copy_to(&self, destination: &mut [T], start_index: usize) -> Result<(), CollectionError> {
    self.stack.copy_to(destination, start_index)
  }

  /// One-shot iterator over a copy of the elements, top-first.
  #[must_use]
  pub fn iter(&self) -> Snapshot<T> {
    self.stack.iter()
  }
}

impl<T, M, RM> ConcurrentObservableStack<T, M, ObserverRegistry<T, RM>>
where
  T: Clone + 'static,
  M: SyncMutexLike<Vec<T>>,
  RM: SyncMutexLike<ListenerEntries<T>> + Send + Sync + 'static,
{
  /// Registers `listener`. It is removed when the returned handle is dropped.
  #[must_use = "dropping the subscription unsubscribes the listener"]
  pub fn subscribe(&self, listener: ChangeListener<T>) -> Subscription {
    self.notifier.subscribe(listener)
  }

  /// Removes the listener registered under `id`. Returns `false` if it was not registered.
  pub fn unsubscribe(&self, id: ListenerId) -> bool {
    self.notifier.unsubscribe(id)
  }

  /// Number of registered listeners.
  #[must_use]
  pub fn listener_count(&self) -> usize {
    self.notifier.listener_count()
  }
}

impl<T, M, N> Default for ConcurrentObservableStack<T, M, N>
where
  T: Clone,
  M: SyncMutexLike<Vec<T>>,
  N: ChangeNotifier<T> + Default,
{
  fn default() -> Self {
    Self::new()
  }
}

/// Pushes the elements in iteration order without emitting events: the last element becomes the
/// top.
impl<T, M, N> FromIterator<T> for ConcurrentObservableStack<T, M, N>
where
  M: SyncMutexLike<Vec<T>>,
  N: Default,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { stack: iter.into_iter().collect(), notifier: N::default() }
  }
}

impl<'a, T, M, N> IntoIterator for &'a ConcurrentObservableStack<T, M, N>
where
  T: Clone,
  M: SyncMutexLike<Vec<T>>,
  N: ChangeNotifier<T>,
{
  type IntoIter = Snapshot<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T, M, N> fmt::Debug for ConcurrentObservableStack<T, M, N>
where
  M: SyncMutexLike<Vec<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConcurrentObservableStack").field("len", &self.stack.len()).finish()
  }
}
