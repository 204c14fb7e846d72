use core::ops::{Deref, DerefMut};


/// Blocking mutex abstraction the concurrent collections are generic over.
///
/// The collections never call user code while a guard is alive, so a non-reentrant lock is
/// sufficient.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the mutex and returns the inner value.
  fn into_inner(self) -> T;

  /// Locks the mutex and returns a guard to the protected value.
  fn lock(&self) -> Self::Guard<'_>;
}

/// Spin-lock backed mutex usable without `std`.
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new mutex guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the mutex and returns the inner value.
  #[must_use]
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex and returns the guard.
  #[must_use]
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }
}

impl<T: Default> Default for SpinSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncMutexLike<T> for SpinSyncMutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    SpinSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    SpinSyncMutex::lock(self)
  }
}
