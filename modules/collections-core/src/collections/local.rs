//! Observable collections for exclusive access.
//!
//! Mutation goes through `&mut self`, so there is no interleaving to reason about: events are
//! emitted in mutation order. The notification rules are the same as for the concurrent
//! variants.

mod observable_queue;
mod observable_stack;

pub use observable_queue::ObservableQueue;
pub use observable_stack::ObservableStack;

/// Shrinks when less than this share of the capacity is in use.
const TRIM_THRESHOLD_PERCENT: usize = 90;

fn should_trim(len: usize, capacity: usize) -> bool {
  len.saturating_mul(100) < capacity.saturating_mul(TRIM_THRESHOLD_PERCENT)
}
