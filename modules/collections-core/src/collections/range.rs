use core::ops::Range;

use crate::error::{CollectionError, InvalidArgumentKind};


/// Validates a `(offset, count)` window over a slice of length `len`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if `offset > len` or if `offset + count`
/// exceeds `len` (including arithmetic overflow).
pub fn validate_range(len: usize, offset: usize, count: usize) -> Result<Range<usize>, CollectionError> {
  if offset > len {
    tracing::warn!(offset, len, "range offset rejected");
    return Err(InvalidArgumentKind::OffsetOutOfRange { offset, len }.into());
  }
  match offset.checked_add(count) {
    | Some(end) if end <= len => Ok(offset..end),
    | _ => {
      tracing::warn!(offset, count, len, "range rejected");
      Err(InvalidArgumentKind::RangeOutOfBounds { offset, count, len }.into())
    },
  }
}

/// Validates copying `count` elements into a destination of length `dest_len` starting at
/// `start`, returning the destination window.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if `start > dest_len` or if fewer than `count`
/// slots remain after `start`.
pub fn validate_copy(dest_len: usize, start: usize, count: usize) -> Result<Range<usize>, CollectionError> {
  if start > dest_len {
    tracing::warn!(start, dest_len, "copy start index rejected");
    return Err(InvalidArgumentKind::OffsetOutOfRange { offset: start, len: dest_len }.into());
  }
  let available = dest_len - start;
  if count > available {
    tracing::warn!(start, count, available, "copy destination too small");
    return Err(InvalidArgumentKind::InsufficientCapacity { start, required: count, available }.into());
  }
  Ok(start..start + count)
}
