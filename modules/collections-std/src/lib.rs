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
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_async)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::naive_bytecount)]
#![deny(clippy::if_same_then_else)]
#![deny(clippy::cmp_null)]

//! std bindings for the zoollection observable collections.
//!
//! Binds the mutex abstraction of `zoollection_core_rs` to [`std::sync::Mutex`] and exposes
//! ready-to-use aliases and constructors for the concurrent observable stack and queue.

/// Collection aliases and constructors backed by [`StdSyncMutex`](sync::StdSyncMutex).
pub mod collections;
/// Mutex implementations for std environments.
pub mod sync;

pub use collections::{
  make_std_observable_queue, make_std_observable_stack, StdConcurrentObservableQueue, StdConcurrentObservableStack,
  StdConcurrentQueue, StdConcurrentStack, StdObserverRegistry,
};
pub use sync::StdSyncMutex;
pub use zoollection_core_rs::{
  ChangeAction, ChangeEvent, ChangeListener, ChangeNotifier, CollectionError, InvalidArgumentKind, ListenerId,
  NoopNotifier, Snapshot, Subscription,
};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use zoollection_core_rs::prelude::*;

  pub use crate::{
    collections::{
      make_std_observable_queue, make_std_observable_stack, StdConcurrentObservableQueue, StdConcurrentObservableStack,
    },
    sync::StdSyncMutex,
  };
}
