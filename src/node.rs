use crate::{Refs, RefsArray, RefsSingle, Side};
use core::fmt::Debug;

/// Node of the binary tree, or a position of its underlying storage.
///
/// A node is either active, holding its data, or closed, after the node is removed from the tree.
/// References of an active node are positions of its parent and children in the same storage.
pub struct Node<T> {
    data: Option<T>,
    generation: usize,
    parent: RefsSingle,
    children: RefsArray<2>,
}

impl<T> Node<T> {
    /// Creates a new active node with the given `data` and with no connections.
    pub(crate) fn new_free_node(data: T) -> Self {
        Self {
            data: Some(data),
            generation: 0,
            parent: Refs::empty(),
            children: Refs::empty(),
        }
    }

    // ref

    /// Returns a reference to the data of the node; None if the node is already closed.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the generation of the position of this node in the storage.
    ///
    /// The generation changes every time the node at this position is closed.
    #[inline(always)]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns a reference to the parent reference.
    pub fn parent(&self) -> &RefsSingle {
        &self.parent
    }

    /// Returns a reference to the children references; left child followed by the right child.
    pub fn children(&self) -> &RefsArray<2> {
        &self.children
    }

    /// Returns the position of the child on the given `side`, if any.
    #[inline(always)]
    pub fn child(&self, side: Side) -> Option<usize> {
        self.children.get(side.ref_idx())
    }

    /// Returns true if the node has a child on the given `side`.
    #[inline(always)]
    pub fn has_child(&self, side: Side) -> bool {
        self.child(side).is_some()
    }

    /// Returns true if the node is currently attached to a parent.
    #[inline(always)]
    pub fn has_parent(&self) -> bool {
        !self.parent.is_empty()
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    // mut

    /// Returns a mutable reference to the underlying data.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub(crate) fn parent_mut(&mut self) -> &mut RefsSingle {
        &mut self.parent
    }

    pub(crate) fn children_mut(&mut self) -> &mut RefsArray<2> {
        &mut self.children
    }

    /// Re-opens a closed node with the given `data`, keeping its generation.
    pub(crate) fn reopen(&mut self, data: T) {
        debug_assert!(self.is_closed());
        debug_assert!(self.parent.is_empty() && self.children.is_empty());
        self.data = Some(data);
    }

    /// Closes the node, clears its connections, moves to the next generation and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub(crate) fn close(&mut self) -> T {
        self.parent.clear();
        self.children.clear();
        self.generation = self.generation.wrapping_add(1);
        self.data.take().expect("must be an open node")
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}
