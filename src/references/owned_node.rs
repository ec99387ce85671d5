use super::NodeIdx;
use crate::memory::DroppedHandles;
use core::fmt::Debug;

/// Owning handle to the root of a detached subtree.
///
/// A node is owned either by its parent, or, when it has no parent, by exactly one `OwnedNode`.
/// The handle is neither `Copy` nor `Clone`; therefore, a subtree cannot be attached to two parents.
///
/// The handle is consumed by one of the following:
/// * attaching the subtree to another node with `fork` or `replace_left`, `replace_right`, `replace_child`;
/// * destroying the subtree with `release`.
///
/// Dropping the handle without consuming it hands the subtree back to the tree, which destroys it
/// at the beginning of its next mutating operation, or on `release_dropped`.
#[must_use = "the subtree is destroyed when its owning handle is dropped"]
pub struct OwnedNode<T> {
    idx: NodeIdx<T>,
    dropped: Option<DroppedHandles<T>>,
}

impl<T> Drop for OwnedNode<T> {
    fn drop(&mut self) {
        if let Some(dropped) = self.dropped.take() {
            dropped.push(self.idx);
        }
    }
}

impl<T> Debug for OwnedNode<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("OwnedNode").field(&self.idx).finish()
    }
}

impl<T> PartialEq<NodeIdx<T>> for OwnedNode<T> {
    fn eq(&self, other: &NodeIdx<T>) -> bool {
        self.idx == *other
    }
}

impl<T> OwnedNode<T> {
    #[inline(always)]
    pub(crate) fn new(idx: NodeIdx<T>, dropped: DroppedHandles<T>) -> Self {
        Self {
            idx,
            dropped: Some(dropped),
        }
    }

    /// Returns a non-owning index of the root node of the subtree.
    #[inline(always)]
    pub fn idx(&self) -> NodeIdx<T> {
        self.idx
    }

    /// Consumes the handle without handing the subtree back to the tree; ownership of the
    /// subtree moves to the caller, which either attaches or releases it.
    #[inline(always)]
    pub(crate) fn into_idx(mut self) -> NodeIdx<T> {
        self.dropped = None;
        self.idx
    }
}
