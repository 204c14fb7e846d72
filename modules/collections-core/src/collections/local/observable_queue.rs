use alloc::{collections::VecDeque, vec::Vec};
use core::fmt;

use crate::{
  collections::{range::validate_copy, Snapshot},
  error::CollectionError,
  event::ChangeEvent,
  observer::{ChangeListener, ChangeNotifier, ListenerEntries, ListenerId, ObserverRegistry, Subscription},
  sync::SyncMutexLike,
};


/// FIFO collection reporting every mutation to a [`ChangeNotifier`].
pub struct ObservableQueue<T, N = ObserverRegistry<T>> {
  items:    VecDeque<T>,
  notifier: N,
}

impl<T, N> ObservableQueue<T, N>
where
  T: Clone,
  N: ChangeNotifier<T>,
{
  /// Creates an empty queue.
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
    Self { items: VecDeque::with_capacity(capacity), notifier: N::default() }
  }

  /// Creates an empty queue reporting to `notifier`.
  #[must_use]
  pub const fn with_notifier(notifier: N) -> Self {
    Self { items: VecDeque::new(), notifier }
  }

  /// Creates a queue from elements listed front-first.
  #[must_use]
  pub fn from_vec(items: Vec<T>) -> Self
  where
    N: Default, {
    Self { items: VecDeque::from(items), notifier: N::default() }
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
  pub fn enqueue(&mut self, item: T) {
    self.items.push_back(item.clone());
    self.emit(ChangeEvent::added_item(item));
  }

  /// Removes and returns the head, emitting `Removed([item])`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::PreconditionViolated`] if the queue is empty.
  pub fn dequeue(&mut self) -> Result<T, CollectionError> {
    self.try_dequeue().ok_or(CollectionError::PreconditionViolated)
  }

  /// Removes and returns the head, or `None` without emitting when empty.
  pub fn try_dequeue(&mut self) -> Option<T> {
    let item = self.items.pop_front()?;
    self.emit(ChangeEvent::removed_item(item.clone()));
    Some(item)
  }

  /// Returns the head.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::PreconditionViolated`] if the queue is empty.
  pub fn peek(&self) -> Result<&T, CollectionError> {
    self.try_peek().ok_or(CollectionError::PreconditionViolated)
  }

  /// Returns the head, or `None` when empty.
  #[must_use]
  pub fn try_peek(&self) -> Option<&T> {
    self.items.front()
  }

  /// Removes every element. Emits `Reset` only if the queue was not empty.
  pub fn clear(&mut self) {
    if self.items.is_empty() {
      return;
    }
    self.items.clear();
    self.emit(ChangeEvent::Reset);
  }

  /// Returns `true` if `item` is in the queue.
  #[must_use]
  pub fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.items.contains(item)
  }

  /// Number of elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns `true` if the queue holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Copy of the elements, front-first.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.items.iter().cloned().collect()
  }

  /// Copies the elements front-first into `destination[start_index..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if `start_index` is past the end of
  /// `destination` or if the remaining slots cannot hold every element.
  pub fn copy_to(&self, destination: &mut [T], start_index: usize) -> Result<(), CollectionError> {
    let window = validate_copy(destination.len(), start_index, self.items.len())?;
    for (slot, item) in destination[window].iter_mut().zip(self.items.iter()) {
      slot.clone_from(item);
    }
    Ok(())
  }

  /// One-shot iterator over a copy of the elements, front-first.
  #[must_use]
  pub fn iter(&self) -> Snapshot<T> {
    Snapshot::new(self.to_vec())
  }

  /// Releases unused capacity if less than 90% of it is in use. Emits nothing.
  pub fn trim_excess(&mut self) {
    if super::should_trim(self.items.len(), self.items.capacity()) {
      self.items.shrink_to_fit();
    }
  }
}

impl<T, RM> ObservableQueue<T, ObserverRegistry<T, RM>>
where
  T: Clone + 'static,
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

impl<T, N> Default for ObservableQueue<T, N>
where
  T: Clone,
  N: ChangeNotifier<T> + Default,
{
  fn default() -> Self {
    Self::new()
  }
}

/// Enqueues the elements in iteration order without emitting events.
impl<T, N: Default> FromIterator<T> for ObservableQueue<T, N> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { items: iter.into_iter().collect(), notifier: N::default() }
  }
}

impl<T, N> fmt::Debug for ObservableQueue<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ObservableQueue").field("len", &self.items.len()).finish()
  }
}
