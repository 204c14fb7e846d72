use super::InvalidArgumentKind;

/// Errors raised by collection operations.
///
/// An empty collection is never reported through this type by the `try_*` operations; they
/// return `None` or `0` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
  /// An offset, count or destination index was rejected before any state change.
  #[error("invalid argument: {0}")]
  InvalidArgument(#[from] InvalidArgumentKind),
  /// A non-`try` removal or peek was called on an empty collection.
  #[error("the collection is empty")]
  PreconditionViolated,
}

impl CollectionError {
  /// Returns `true` if this error is an [`CollectionError::InvalidArgument`].
  #[must_use]
  pub const fn is_invalid_argument(&self) -> bool {
    matches!(self, CollectionError::InvalidArgument(_))
  }
}
