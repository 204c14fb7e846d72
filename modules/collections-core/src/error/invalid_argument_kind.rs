/// Detail of a rejected argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentKind {
  /// The offset lies past the end of the slice.
  #[error("offset {offset} is out of range for length {len}")]
  OffsetOutOfRange {
    /// Requested offset.
    offset: usize,
    /// Length of the slice.
    len:    usize,
  },
  /// `offset + count` exceeds the slice length.
  #[error("range of {count} elements at offset {offset} exceeds length {len}")]
  RangeOutOfBounds {
    /// Requested offset.
    offset: usize,
    /// Requested number of elements.
    count:  usize,
    /// Length of the slice.
    len:    usize,
  },
  /// The destination cannot hold the elements to copy.
  #[error("destination has {available} free slots after index {start}, {required} required")]
  InsufficientCapacity {
    /// Destination start index.
    start:     usize,
    /// Number of elements to copy.
    required:  usize,
    /// Slots available from `start` to the end of the destination.
    available: usize,
  },
}
