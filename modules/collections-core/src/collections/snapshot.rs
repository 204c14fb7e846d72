use alloc::vec::{IntoIter, Vec};
use core::iter::FusedIterator;

/// One-shot iterator over a point-in-time copy of a collection.
///
/// Produced by the `iter` methods of the collections. Mutating the collection afterwards does not
/// affect the elements yielded, and the iterator cannot be restarted.
#[derive(Debug)]
pub struct Snapshot<T> {
  items: IntoIter<T>,
}

impl<T> Snapshot<T> {
  pub(crate) fn new(items: Vec<T>) -> Self {
    Self { items: items.into_iter() }
  }

  /// Elements not yet yielded.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    self.items.as_slice()
  }
}

impl<T> Iterator for Snapshot<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.items.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.items.size_hint()
  }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.items.next_back()
  }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}
