//! Thread-safe LIFO/FIFO collections.
//!
//! [`ConcurrentStack`] and [`ConcurrentQueue`] guard their buffer with a [`SyncMutexLike`]
//! implementation and mirror the element count in an atomic, so `len` never takes the lock.
//! Every operation, including the range operations, runs inside a single critical section and is
//! therefore atomic with respect to every other operation on the same instance.
//!
//! [`ConcurrentObservableStack`] and [`ConcurrentObservableQueue`] add change notification on
//! top. Notification happens after the critical section has ended: observers always see a change
//! that is already visible, but under contention two mutations may both complete before either
//! notification is delivered, so observers can see events in a different relative order than the
//! mutations. Callers that need strict ordering must serialize the mutating calls themselves.
//!
//! [`SyncMutexLike`]: crate::sync::SyncMutexLike

mod concurrent_observable_queue;
mod concurrent_observable_stack;
mod concurrent_queue;
mod concurrent_stack;

pub use concurrent_observable_queue::ConcurrentObservableQueue;
pub use concurrent_observable_stack::ConcurrentObservableStack;
pub use concurrent_queue::ConcurrentQueue;
pub use concurrent_stack::ConcurrentStack;
