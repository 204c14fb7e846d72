use alloc::{collections::VecDeque, vec::Vec};
use core::fmt;

use super::ConcurrentQueue;
use crate::{
  collections::{range::validate_range, Snapshot},
  error::CollectionError,
  event::ChangeEvent,
  observer::{ChangeListener, ChangeNotifier, ListenerEntries, ListenerId, ObserverRegistry, Subscription},
  sync::{SpinSyncMutex, SyncMutexLike},
};


/// Thread-safe FIFO collection that reports every mutation to a [`ChangeNotifier`].
///
/// Notification follows the same rules as
/// [`ConcurrentObservableStack`](super::ConcurrentObservableStack): one event per accepted
/// mutation, delivered after the change is visible and outside the internal lock.
pub struct ConcurrentObservableQueue<T, M = SpinSyncMutex<VecDeque<T>>, N = ObserverRegistry<T>> {
  queue:    ConcurrentQueue<T, M>,
  notifier: N,
}

impl<T, M, N> ConcurrentObservableQueue<T, M, N>
where
  T: Clone,
  M: SyncMutexLike<VecDeque<T>>,
  N: ChangeNotifier<T>,
{
  /// Creates an empty queue with a default notifier.
  #[must_use]
  pub fn new() -> Self
  where
    N: Default, {
    Self::with_notifier(N::default())
  }

  /// Creates an empty queue with room for `capacity` elements.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self
  where
    N: Default, {
    Self { queue: ConcurrentQueue::with_capacity(capacity), notifier: N::default() }
  }

  /// Creates an empty queue reporting to `notifier`.
  #[must_use]
  pub fn with_notifier(notifier: N) -> Self {
    Self { queue: ConcurrentQueue::new(), notifier }
  }

  /// Creates a queue from elements listed front-first. No event is emitted.
  #[must_use]
  pub fn from_vec(items: Vec<T>) -> Self
  where
    N: Default, {
    Self { queue: ConcurrentQueue::from_vec(items), notifier: N::default() }
  }

  /// Notifier receiving this queue's events.
  #[must_use]
  pub const fn notifier(&self) -> &N {
    &self.notifier
  }

  fn emit(&self, event: ChangeEvent<T>) {
    tracing::trace!(action = ?event.action(), items = event.len(), "queue changed");
    self.notifier.notify(&event);
  }

  /// Appends `item` and emits `Added([item])`.
  pub fn enqueue(&self, item: T) {
    self.queue.enqueue(item.clone());
    self.emit(ChangeEvent::added_item(item));
  }

  /// Appends `items` atomically and emits one `Added` event carrying them in order.
  ///
  /// An empty slice emits nothing.
  pub fn enqueue_range(&self, items: &[T]) {
    let added = items.to_vec();
    self.queue.enqueue_range(items);
    if let Some(event) = ChangeEvent::added(added) {
      self.emit(event);
    }
  }

  /// Appends `items[offset..offset + count]` atomically. See
  /// [`enqueue_range`](Self::enqueue_range).
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `items`. The
  /// queue is unchanged and nothing is emitted.
  pub fn enqueue_range_at(&self, items: &[T], offset: usize, count: usize) -> Result<(), CollectionError> {
    let window = validate_range(items.len(), offset, count)?;
    self.enqueue_range(&items[window]);
    Ok(())
  }

  /// Removes the head and emits `Removed([item])`. Returns `None`, silently, when empty.
  pub fn try_dequeue(&self) -> Option<T> {
    let item = self.queue.try_dequeue()?;
    self.emit(ChangeEvent::removed_item(item.clone()));
    Some(item)
  }

  /// Returns a copy of the head without removing it.
  #[must_use]
  pub fn try_peek(&self) -> Option<T> {
    self.queue.try_peek()
  }

  /// Removes up to `buffer.len()` elements atomically, writing them oldest-first into `buffer`.
  ///
  /// Emits one `Removed` event carrying the removed elements oldest-first, unless nothing was
  /// removed. Returns the number of elements removed.
  pub fn try_dequeue_range(&self, buffer: &mut [T]) -> usize {
    let dequeued = self.queue.try_dequeue_many(buffer.len());
    let count = dequeued.len();
    for (slot, item) in buffer.iter_mut().zip(dequeued.iter().cloned()) {
      *slot = item;
    }
    if let Some(event) = ChangeEvent::removed(dequeued) {
      self.emit(event);
    }
    count
  }

  /// Removes up to `count` elements atomically into `buffer[offset..]`. See
  /// [`try_dequeue_range`](Self::try_dequeue_range).
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if the window does not fit in `buffer`. Nothing
  /// is removed or emitted in that case.
  pub fn try_dequeue_range_at(&self, buffer: &mut [T], offset: usize, count: usize) -> Result<usize, CollectionError> {
    let window = validate_range(buffer.len(), offset, count)?;
    Ok(self.try_dequeue_range(&mut buffer[window]))
  }

  /// Removes every element. Emits `Reset` only if this call removed something.
  pub fn clear(&self) {
    if self.queue.clear() > 0 {
      self.emit(ChangeEvent::Reset);
    }
  }

  /// Number of elements, read without taking the lock.
  #[must_use]
  pub fn len(&self) -> usize {
    self.queue.len()
  }

  /// Returns `true` if the queue holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }

  /// Point-in-time copy of the elements, front-first.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.queue.to_vec()
  }

  /// Copies the elements front-first into `destination[start_index..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if `start_index` is past the end of
  /// `destination` or if the remaining slots cannot hold every element.
  pub fn copy_to(&self, destination: &mut [T], start_index: usize) -> Result<(), CollectionError> {
    self.queue.copy_to(destination, start_index)
  }

  /// One-shot iterator over a copy of the elements, front-first.
  #[must_use]
  pub fn iter(&self) -> Snapshot<T> {
    self.queue.iter()
  }
}

impl<T, M, RM> ConcurrentObservableQueue<T, M, ObserverRegistry<T, RM>>
where
  T: Clone + 'static,
  M: SyncMutexLike<VecDeque<T>>,
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

impl<T, M, N> Default for ConcurrentObservableQueue<T, M, N>
where
  T: Clone,
  M: SyncMutexLike<VecDeque<T>>,
  N: ChangeNotifier<T> + Default,
{
  fn default() -> Self {
    Self::new()
  }
}

/// Enqueues the elements in iteration order without emitting events.
impl<T, M, N> FromIterator<T> for ConcurrentObservableQueue<T, M, N>
where
  M: SyncMutexLike<VecDeque<T>>,
  N: Default,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { queue: iter.into_iter().collect(), notifier: N::default() }
  }
}

impl<'a, T, M, N> IntoIterator for &'a ConcurrentObservableQueue<T, M, N>
where
  T: Clone,
  M: SyncMutexLike<VecDeque<T>>,
  N: ChangeNotifier<T>,
{
  type IntoIter = Snapshot<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T, M, N> fmt::Debug for ConcurrentObservableQueue<T, M, N>
where
  M: SyncMutexLike<VecDeque<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConcurrentObservableQueue").field("len", &self.queue.len()).finish()
  }
}
