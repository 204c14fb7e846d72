use std::collections::VecDeque;

use zoollection_core_rs::{ConcurrentObservableQueue, ConcurrentQueue};

use super::StdObserverRegistry;
use crate::sync::StdSyncMutex;


/// Concurrent queue guarded by [`StdSyncMutex`].
pub type StdConcurrentQueue<T> = ConcurrentQueue<T, StdSyncMutex<VecDeque<T>>>;

/// Concurrent observable queue guarded by [`StdSyncMutex`] and notifying a
/// [`StdObserverRegistry`].
pub type StdConcurrentObservableQueue<T> =
  ConcurrentObservableQueue<T, StdSyncMutex<VecDeque<T>>, StdObserverRegistry<T>>;

/// Constructs an empty [`StdConcurrentObservableQueue`] with room for `capacity` elements.
#[must_use]
pub fn make_std_observable_queue<T: Clone>(capacity: usize) -> StdConcurrentObservableQueue<T> {
  StdConcurrentObservableQueue::with_capacity(capacity)
}
