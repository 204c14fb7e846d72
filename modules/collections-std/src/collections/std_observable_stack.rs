use zoollection_core_rs::{ConcurrentObservableStack, ConcurrentStack};

use super::StdObserverRegistry;
use crate::sync::StdSyncMutex;


/// Concurrent stack guarded by [`StdSyncMutex`].
pub type StdConcurrentStack<T> = ConcurrentStack<T, StdSyncMutex<Vec<T>>>;

/// Concurrent observable stack guarded by [`StdSyncMutex`] and notifying a
/// [`StdObserverRegistry`].
pub type StdConcurrentObservableStack<T> =
  ConcurrentObservableStack<T, StdSyncMutex<Vec<T>>, StdObserverRegistry<T>>;

/// Constructs an empty [`StdConcurrentObservableStack`] with room for `capacity` elements.
#[must_use]
pub fn make_std_observable_stack<T: Clone>(capacity: usize) -> StdConcurrentObservableStack<T> {
  StdConcurrentObservableStack::with_capacity(capacity)
}
