use alloc::vec::Vec;
use core::fmt;

use crate::{
  collections::{range::validate_copy, Snapshot},
  error::CollectionError,
  event::ChangeEvent,
  observer::{ChangeListener, ChangeNotifier, ListenerEntries, ListenerId, ObserverRegistry, Subscription},
  sync::SyncMutexLike,
};

#[cfg(test)]
mod tests;

/// LIFO collection reporting every mutation to a [`ChangeNotifier`].
pub struct ObservableStack<T, N = ObserverRegistry<T>> {
  items:    Vec<T>,
  notifier: N,
}

impl<T, N> ObservableStack<T, N>
where
  T: Clone,
  N: ChangeNotifier<T>,
{
  /// Creates an empty stack.
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
    Self { items: Vec::with_capacity(capacity), notifier: N::default() }
  }

  /// Creates an empty stack reporting to `notifier`.
  #[must_use]
  pub const fn with_notifier(notifier: N) -> Self {
    Self { items: Vec::new(), notifier }
  }

  /// Creates a stack from elements listed top-first, the order produced by
  /// [`to_vec`](Self::to_vec).
  #[must_use]
  pub fn from_vec(mut items: Vec<T>) -> Self
  where
    N: Default, {
    items.reverse();
    Self { items, notifier: N::default() }
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
  pub fn push(&mut self, item: T) {
    self.items.push(item.clone());
    self.emit(ChangeEvent::added_item(item));
  }

  /// Removes and returns the top element, emitting `Removed([item])`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::PreconditionViolated`] if the stack is empty.
  pub fn pop(&mut self) -> Result<T, CollectionError> {
    self.try_pop().ok_or(CollectionError::PreconditionViolated)
  }

  /// Removes and returns the top element, or `None` without emitting when empty.
  pub fn try_pop(&mut self) -> Option<T> {
    let item = self.items.pop()?;
    self.emit(ChangeEvent::removed_item(item.clone()));
    Some(item)
  }

  /// Returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::PreconditionViolated`] if the stack is empty.
  pub fn peek(&self) -> Result<&T, CollectionError> {
    self.try_peek().ok_or(CollectionError::PreconditionViolated)
  }

  /// Returns the top element, or `None` when empty.
  #[must_use]
  pub fn try_peek(&self) -> Option<&T> {
    self.items.last()
  }

  /// Removes every element. Emits `Reset` only if the stack was not empty.
  pub fn clear(&mut self) {
    if self.items.is_empty() {
      return;
    }
    self.items.clear();
    self.emit(ChangeEvent::Reset);
  }

  /// Returns `true` if `item` is in the stack.
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

  /// Returns `true` if the stack holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Copy of the elements, top-first.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T> {
    self.items.iter().rev().cloned().collect()
  }

  /// Copies the elements top-first into `destination[start_index..]`.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::InvalidArgument`] if `start_index` is past the end of
  /// `destination` or if the remaining slots cannot hold every element.
  pub fn copy_to(&self, destination: &mut [T], start_index: usize) -> Result<(), CollectionError> {
    let window = validate_copy(destination.len(), start_index, self.items.len())?;
    for (slot, item) in destination[window].iter_mut().zip(self.items.iter().rev()) {
      slot.clone_from(item);
    }
    Ok(())
  }

  /// One-shot iterator over a copy of the elements, top-first.
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

impl<T, RM> ObservableStack<T, ObserverRegistry<T, RM>>
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

impl<T, N> Default for ObservableStack<T, N>
where
  T: Clone,
  N: ChangeNotifier<T> + Default,
{
  fn default() -> Self {
    Self::new()
  }
}

/// Pushes the elements in iteration order without emitting events: the last element becomes the
/// top.
impl<T, N: Default> FromIterator<T> for ObservableStack<T, N> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { items: iter.into_iter().collect(), notifier: N::default() }
  }
}

impl<T, N> fmt::Debug for ObservableStack<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ObservableStack").field("len", &self.items.len()).finish()
  }
}
