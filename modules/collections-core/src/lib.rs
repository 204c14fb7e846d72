//! Observable stack and queue collections.
//!
//! Every collection in this crate reports its mutations to subscribed observers through a
//! [`ChangeEvent`]. The concurrent variants combine a lock-guarded LIFO/FIFO buffer with a
//! synchronous fan-out that runs after the lock has been released, so observers may re-enter
//! the collection they observe.
//!
//! # Key Features
//! - [`ConcurrentObservableStack`] / [`ConcurrentObservableQueue`] for shared access
//! - [`ObservableStack`] / [`ObservableQueue`] for exclusive (`&mut`) access
//! - [`ObserverRegistry`] with RAII [`Subscription`] handles
//! - [`ChangeNotifier`] as the single extension point for custom fan-out
//!
//! # Example Usage
//! ```
//! use zoollection_core_rs::{ChangeEvent, ChangeListener, ConcurrentObservableStack};
//!
//! let stack: ConcurrentObservableStack<u32> = ConcurrentObservableStack::new();
//! let subscription = stack.subscribe(ChangeListener::new(|event: &ChangeEvent<u32>| {
//!   assert_eq!(event.items(), &[7]);
//! }));
//! stack.push(7);
//! drop(subscription);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::disallowed_types))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![deny(clippy::cmp_null)]

extern crate alloc;

/// Observable stack and queue implementations.
pub mod collections;
/// Error types shared by every collection.
pub mod error;
/// Change descriptors delivered to observers.
pub mod event;
/// Observer registration and fan-out.
pub mod observer;
/// Mutex abstraction used by the concurrent collections.
pub mod sync;
#[cfg(test)]
mod test_support;

pub use collections::{
  concurrent::{ConcurrentObservableQueue, ConcurrentObservableStack, ConcurrentQueue, ConcurrentStack},
  local::{ObservableQueue, ObservableStack},
  range::{validate_copy, validate_range},
  Snapshot,
};
pub use error::{CollectionError, InvalidArgumentKind};
pub use event::{ChangeAction, ChangeEvent};
pub use observer::{
  ChangeListener, ChangeNotifier, ListenerEntries, ListenerId, NoopNotifier, ObserverRegistry, Subscription,
};
pub use sync::{SpinSyncMutex, SyncMutexLike};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use crate::{
    ChangeAction, ChangeEvent, ChangeListener, ChangeNotifier, CollectionError, ConcurrentObservableQueue,
    ConcurrentObservableStack, ObservableQueue, ObservableStack, ObserverRegistry, Subscription,
  };
}
