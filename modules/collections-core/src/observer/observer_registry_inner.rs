use alloc::vec::Vec;
use core::marker::PhantomData;

use portable_atomic::AtomicU64;

use super::{ChangeListener, ListenerId};
use crate::sync::SyncMutexLike;

/// Listener list stored by an [`ObserverRegistry`](super::ObserverRegistry), in registration order.
pub type ListenerEntries<T> = Vec<(ListenerId, ChangeListener<T>)>;

pub(super) struct ObserverRegistryInner<T, M> {
  pub(super) next_id:   AtomicU64,
  pub(super) listeners: M,
  _pd:                  PhantomData<fn(&T)>,
}

impl<T, M> ObserverRegistryInner<T, M>
where
  M: SyncMutexLike<ListenerEntries<T>>,
{
  pub(super) fn new() -> Self {
    Self { next_id: AtomicU64::new(1), listeners: M::new(Vec::new()), _pd: PhantomData }
  }

  pub(super) fn remove(&self, id: ListenerId) -> bool {
    let mut guard = self.listeners.lock();
    match guard.iter().position(|(entry_id, _)| *entry_id == id) {
      | Some(index) => {
        guard.remove(index);
        true
      },
      | None => false,
    }
  }
}

/// Type-erased removal used by [`Subscription`](super::Subscription).
pub(super) trait ListenerRemoval: Send + Sync {
  fn remove_listener(&self, id: ListenerId) -> bool;
}

impl<T, M> ListenerRemoval for ObserverRegistryInner<T, M>
where
  M: SyncMutexLike<ListenerEntries<T>> + Send + Sync,
{
  fn remove_listener(&self, id: ListenerId) -> bool {
    self.remove(id)
  }
}
