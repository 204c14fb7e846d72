//! std-specific aliases and constructors for the observable collections.

mod std_observable_queue;
mod std_observable_stack;

pub use std_observable_queue::{make_std_observable_queue, StdConcurrentObservableQueue, StdConcurrentQueue};
pub use std_observable_stack::{make_std_observable_stack, StdConcurrentObservableStack, StdConcurrentStack};
use zoollection_core_rs::{ListenerEntries, ObserverRegistry};

use crate::sync::StdSyncMutex;

/// Observer registry whose listener list is guarded by [`StdSyncMutex`].
pub type StdObserverRegistry<T> = ObserverRegistry<T, StdSyncMutex<ListenerEntries<T>>>;
