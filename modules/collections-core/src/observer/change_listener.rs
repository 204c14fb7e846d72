use alloc::sync::Arc;
use core::fmt;

use crate::event::ChangeEvent;

type ChangeListenerFn<T> = dyn Fn(&ChangeEvent<T>) + Send + Sync;

/// Shared wrapper for change listeners.
pub struct ChangeListener<T> {
  inner: Arc<ChangeListenerFn<T>>,
}

impl<T> ChangeListener<T> {
  /// Creates a new shared listener from a closure.
  #[must_use]
  pub fn new<F>(listener: F) -> Self
  where
    F: Fn(&ChangeEvent<T>) + Send + Sync + 'static, {
    Self { inner: Arc::new(listener) }
  }

  /// Invokes the listener with `event`.
  pub fn invoke(&self, event: &ChangeEvent<T>) {
    (self.inner)(event);
  }
}

impl<T> Clone for ChangeListener<T> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<T> fmt::Debug for ChangeListener<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ChangeListener").finish_non_exhaustive()
  }
}
