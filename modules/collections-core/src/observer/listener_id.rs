use core::fmt;

/// Identifier assigned to a listener when it subscribes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
  /// Wraps a raw identifier.
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw identifier.
  #[must_use]
  pub const fn get(self) -> u64 {
    self.0
  }
}

impl fmt::Display for ListenerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "listener-{}", self.0)
  }
}
