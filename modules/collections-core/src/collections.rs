/// Thread-safe adapters and their observable wrappers.
pub mod concurrent;
/// Observable collections for exclusive (`&mut`) access.
pub mod local;
/// Argument validation shared by range and copy operations.
pub mod range;
mod snapshot;

pub use snapshot::Snapshot;
