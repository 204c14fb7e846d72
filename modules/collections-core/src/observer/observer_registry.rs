use alloc::{sync::Arc, vec::Vec};
use core::fmt;

use portable_atomic::Ordering;

use super::{
  observer_registry_inner::{ListenerRemoval, ObserverRegistryInner},
  ChangeListener, ChangeNotifier, ListenerEntries, ListenerId, Subscription,
};
use crate::{
  event::ChangeEvent,
  sync::{SpinSyncMutex, SyncMutexLike},
};


/// Per-collection list of change listeners with synchronous fan-out.
///
/// Listeners are invoked in registration order from a snapshot taken under the lock; the lock is
/// released before the first listener runs. A listener may therefore subscribe, unsubscribe or
/// mutate the observed collection without deadlocking. Such changes apply to the next event.
pub struct ObserverRegistry<T, M = SpinSyncMutex<ListenerEntries<T>>> {
  inner: Arc<ObserverRegistryInner<T, M>>,
}

impl<T, M> ObserverRegistry<T, M>
where
  M: SyncMutexLike<ListenerEntries<T>>,
{
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { inner: Arc::new(ObserverRegistryInner::new()) }
  }

  /// Removes the listener registered under `id`.
  ///
  /// Returns `false` if no such listener is registered.
  pub fn unsubscribe(&self, id: ListenerId) -> bool {
    let removed = self.inner.remove(id);
    if removed {
      tracing::debug!(listener_id = id.get(), listeners = self.listener_count(), "listener unsubscribed");
    }
    removed
  }

  /// Returns the number of registered listeners.
  #[must_use]
  pub fn listener_count(&self) -> usize {
    self.inner.listeners.lock().len()
  }

  fn snapshot(&self) -> Vec<ChangeListener<T>> {
    let guard = self.inner.listeners.lock();
    guard.iter().map(|(_, listener)| listener.clone()).collect()
  }
}

impl<T, M> ObserverRegistry<T, M>
where
  T: 'static,
  M: SyncMutexLike<ListenerEntries<T>> + Send + Sync + 'static,
{
  /// Registers a new listener and returns a subscription handle.
  #[must_use = "dropping the subscription unsubscribes the listener"]
  pub fn subscribe(&self, listener: ChangeListener<T>) -> Subscription {
    let id = ListenerId::new(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
    let listeners = {
      let mut guard = self.inner.listeners.lock();
      guard.push((id, listener));
      guard.len()
    };
    tracing::debug!(listener_id = id.get(), listeners, "listener subscribed");

    let erased: Arc<dyn ListenerRemoval> = self.inner.clone();
    Subscription { registry: Some(Arc::downgrade(&erased)), id }
  }
}

impl<T, M> ChangeNotifier<T> for ObserverRegistry<T, M>
where
  M: SyncMutexLike<ListenerEntries<T>>,
{
  fn notify(&self, event: &ChangeEvent<T>) {
    for listener in self.snapshot() {
      listener.invoke(event);
    }
  }
}

impl<T, M> Default for ObserverRegistry<T, M>
where
  M: SyncMutexLike<ListenerEntries<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, M> fmt::Debug for ObserverRegistry<T, M>
where
  M: SyncMutexLike<ListenerEntries<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ObserverRegistry").field("listeners", &self.listener_count()).finish()
  }
}
