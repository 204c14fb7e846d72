use alloc::sync::Weak;
use core::fmt;

use super::{observer_registry_inner::ListenerRemoval, ListenerId};

/// Subscription handle returned by [`ObserverRegistry::subscribe`](super::ObserverRegistry::subscribe).
///
/// Automatically unsubscribes on drop. The handle only holds a weak reference, so it never keeps
/// the registry (or the collection owning it) alive.
pub struct Subscription {
  pub(super) registry: Option<Weak<dyn ListenerRemoval>>,
  pub(super) id:       ListenerId,
}

impl Subscription {
  /// Identifier of the subscribed listener.
  #[must_use]
  pub const fn id(&self) -> ListenerId {
    self.id
  }

  /// Unsubscribes now. Equivalent to dropping the handle.
  pub fn unsubscribe(self) {
    drop(self);
  }

  /// Keeps the listener registered for the lifetime of the registry and returns its identifier.
  ///
  /// The listener can still be removed later through `unsubscribe(id)` on the registry.
  #[must_use = "the identifier is the only way left to remove the listener"]
  pub fn detach(mut self) -> ListenerId {
    self.registry = None;
    self.id
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
      if registry.remove_listener(self.id) {
        tracing::debug!(listener_id = self.id.get(), "listener unsubscribed on drop");
      }
    }
  }
}

impl fmt::Debug for Subscription {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subscription").field("id", &self.id).field("attached", &self.registry.is_some()).finish()
  }
}
