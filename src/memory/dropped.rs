use crate::NodeIdx;
use alloc::{rc::Rc, vec::Vec};
use core::cell::RefCell;

/// Roots of the subtrees whose owning handles are dropped without being attached or released.
///
/// The list is shared by a tree and all owning handles it creates; a handle pushes the index of its
/// root on drop, and the tree releases these subtrees on its next mutation.
pub(crate) struct DroppedHandles<T>(Rc<RefCell<Vec<NodeIdx<T>>>>);

impl<T> Clone for DroppedHandles<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for DroppedHandles<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }
}

impl<T> DroppedHandles<T> {
    pub(crate) fn push(&self, idx: NodeIdx<T>) {
        self.0.borrow_mut().push(idx);
    }

    /// Takes out all dropped roots, leaving the list empty.
    pub(crate) fn take(&self) -> Vec<NodeIdx<T>> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}
