use alloc::{vec, vec::Vec};

use super::ChangeAction;

/// Describes one logical mutation of an observable collection.
///
/// `Added` and `Removed` always carry at least one element. Use [`ChangeEvent::added`] and
/// [`ChangeEvent::removed`] to build them from a possibly empty batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent<T> {
  /// Elements inserted by a single operation, in insertion order.
  Added(Vec<T>),
  /// Elements removed by a single operation, in removal order.
  Removed(Vec<T>),
  /// The collection went from non-empty to empty.
  Reset,
}

impl<T> ChangeEvent<T> {
  /// Builds an `Added` event, or `None` when `items` is empty.
  #[must_use]
  pub fn added(items: Vec<T>) -> Option<Self> {
    if items.is_empty() {
      None
    } else {
      Some(ChangeEvent::Added(items))
    }
  }

  /// Builds a `Removed` event, or `None` when `items` is empty.
  #[must_use]
  pub fn removed(items: Vec<T>) -> Option<Self> {
    if items.is_empty() {
      None
    } else {
      Some(ChangeEvent::Removed(items))
    }
  }

  /// `Added` event carrying a single element.
  #[must_use]
  pub fn added_item(item: T) -> Self {
    ChangeEvent::Added(vec![item])
  }

  /// `Removed` event carrying a single element.
  #[must_use]
  pub fn removed_item(item: T) -> Self {
    ChangeEvent::Removed(vec![item])
  }

  /// Returns the kind of this event.
  #[must_use]
  pub const fn action(&self) -> ChangeAction {
    match self {
      | ChangeEvent::Added(_) => ChangeAction::Add,
      | ChangeEvent::Removed(_) => ChangeAction::Remove,
      | ChangeEvent::Reset => ChangeAction::Reset,
    }
  }

  /// Elements carried by the event. Empty for `Reset`.
  #[must_use]
  pub fn items(&self) -> &[T] {
    match self {
      | ChangeEvent::Added(items) | ChangeEvent::Removed(items) => items,
      | ChangeEvent::Reset => &[],
    }
  }

  /// Number of elements carried by the event.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items().len()
  }

  /// Returns `true` for `Reset`, the only event without elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items().is_empty()
  }

  /// Consumes the event and returns its elements.
  #[must_use]
  pub fn into_items(self) -> Vec<T> {
    match self {
      | ChangeEvent::Added(items) | ChangeEvent::Removed(items) => items,
      | ChangeEvent::Reset => Vec::new(),
    }
  }
}
