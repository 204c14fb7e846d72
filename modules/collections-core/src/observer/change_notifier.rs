use alloc::sync::Arc;

use crate::event::ChangeEvent;

/// Fan-out hook invoked by a collection after every accepted mutation.
///
/// The collection calls `notify` on the mutating thread, after the change is visible and with no
/// internal lock held. [`ObserverRegistry`](super::ObserverRegistry) is the default
/// implementation.
pub trait ChangeNotifier<T> {
  /// Delivers `event` to whoever is observing.
  fn notify(&self, event: &ChangeEvent<T>);
}

/// Notifier that discards every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopNotifier;

impl<T> ChangeNotifier<T> for NoopNotifier {
  fn notify(&self, _event: &ChangeEvent<T>) {}
}

impl<T, N> ChangeNotifier<T> for Arc<N>
where
  N: ChangeNotifier<T> + ?Sized,
{
  fn notify(&self, event: &ChangeEvent<T>) {
    (**self).notify(event);
  }
}
