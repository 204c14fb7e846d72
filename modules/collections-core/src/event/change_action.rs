/// Kind of a [`ChangeEvent`](super::ChangeEvent), without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeAction {
  /// Elements were inserted.
  Add,
  /// Elements were removed.
  Remove,
  /// The collection was cleared.
  Reset,
}
