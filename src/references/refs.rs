use core::fmt::Debug;

/// References among nodes.
///
/// A reference is the position of the referenced node in the storage of the tree.
pub trait Refs: Clone + Debug {
    /// Creates an empty references.
    fn empty() -> Self;

    /// Returns true if the references collection is empty.
    fn is_empty(&self) -> bool;

    /// Clears the references.
    fn clear(&mut self);
}
