//! `SyncMutexLike` backend on top of `std::sync::Mutex`.

use std::sync::{LockResult, Mutex, MutexGuard};

use zoollection_core_rs::sync::SyncMutexLike;


/// Blocking mutex for the concurrent collections on std targets.
///
/// A panic on another thread while it held the lock poisons the mutex. The collections never run
/// listener code under the lock, so the guarded buffer is still consistent. The next `lock` logs
/// the poison once, clears it and hands out the value as usual.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex guarding `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the mutex and returns the guarded value, poisoned or not.
  #[must_use]
  pub fn into_inner(self) -> T {
    recover(self.0.into_inner())
  }

  /// Blocks until the lock is acquired. A poisoned mutex is recovered and its poison cleared.
  #[must_use]
  pub fn lock(&self) -> MutexGuard<'_, T> {
    let guard = recover(self.0.lock());
    self.0.clear_poison();
    guard
  }
}

fn recover<G>(result: LockResult<G>) -> G {
  result.unwrap_or_else(|poisoned| {
    tracing::warn!("collection mutex poisoned by a panicking thread; recovering");
    poisoned.into_inner()
  })
}

impl<T: Default> Default for StdSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }
}
