use crate::{Utilization, node::Node};
use alloc::vec::Vec;
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;

/// Core storage of the binary tree.
///
/// Nodes are never moved within the storage. A removed node is closed in place and its position
/// is recorded as vacant, so that a memory policy may place a new node into it.
pub struct CoreTree<T, P>
where
    P: PinnedVec<Node<T>>,
{
    nodes: P,
    vacant: Vec<usize>,
    len: usize,
    phantom: PhantomData<T>,
}

impl<T, P> Default for CoreTree<T, P>
where
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> CoreTree<T, P>
where
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty core storage.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_storage(P::default())
    }

    /// Creates a new empty core storage on top of the given pinned vector of `nodes`.
    ///
    /// Any element of `nodes` is dropped.
    pub fn with_storage(mut nodes: P) -> Self {
        nodes.clear();
        Self {
            nodes,
            vacant: Vec::new(),
            len: 0,
            phantom: PhantomData,
        }
    }

    // get

    /// Returns current node utilization of the storage.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns the number of active nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not there exists any active node.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns a reference to the node at the given `position`; None if out of bounds.
    #[inline(always)]
    pub fn node(&self, position: usize) -> Option<&Node<T>> {
        self.nodes.get(position)
    }

    /// Returns positions of closed nodes which are not yet re-used.
    pub fn vacant_positions(&self) -> &[usize] {
        &self.vacant
    }

    /// Returns a reference to the node at the given `position`.
    ///
    /// # Panics
    ///
    /// Panics if the `position` is out of bounds.
    #[inline(always)]
    pub(crate) fn node_at(&self, position: usize) -> &Node<T> {
        self.nodes.get(position).expect("out-of-bounds")
    }

    // mut

    /// Returns a mutable reference to the node at the given `position`.
    ///
    /// # Panics
    ///
    /// Panics if the `position` is out of bounds.
    #[inline(always)]
    pub(crate) fn node_mut_at(&mut self, position: usize) -> &mut Node<T> {
        self.nodes.get_mut(position).expect("out-of-bounds")
    }

    /// Pops and returns the most recently closed position which is not yet re-used.
    pub fn pop_vacant(&mut self) -> Option<usize> {
        self.vacant.pop()
    }

    /// Appends a new node with the given `data` to the end of the storage and returns its position.
    pub(crate) fn push(&mut self, data: T) -> usize {
        self.len += 1;
        self.nodes.push(Node::new_free_node(data));
        self.nodes.len() - 1
    }

    /// Places a new node with the given `data` into the closed node at the given vacant `position`.
    pub(crate) fn reopen(&mut self, position: usize, data: T) -> usize {
        debug_assert!(!self.vacant.contains(&position));
        self.len += 1;
        self.node_mut_at(position).reopen(data);
        position
    }

    /// Closes the node at the given `position` and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub(crate) fn close(&mut self, position: usize) -> T {
        let data = self.node_mut_at(position).close();
        self.len -= 1;
        self.vacant.push(position);
        data
    }

    /// Drops all nodes.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.vacant.clear();
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orx_split_vec::SplitVec;

    type Core = CoreTree<char, SplitVec<Node<char>>>;

    #[test]
    fn push_close_reopen() {
        let mut core = Core::new();
        assert!(core.is_empty());

        let a = core.push('a');
        let b = core.push('b');
        assert_eq!((a, b), (0, 1));
        assert_eq!(core.len(), 2);

        assert_eq!(core.close(a), 'a');
        assert_eq!(core.len(), 1);
        assert_eq!(core.vacant_positions(), &[0]);
        assert!(core.node_at(a).is_closed());

        let position = core.pop_vacant().unwrap();
        assert_eq!(core.reopen(position, 'c'), 0);
        assert_eq!(core.len(), 2);
        assert!(core.vacant_positions().is_empty());
        assert_eq!(core.node(0).and_then(|x| x.data()), Some(&'c'));
        assert_eq!(core.node(0).map(|x| x.generation()), Some(1));
        assert!(core.node(2).is_none());
    }

    #[test]
    fn utilization() {
        let mut core = Core::new();
        for c in ['a', 'b', 'c', 'd'] {
            core.push(c);
        }
        core.close(1);
        core.close(3);

        let utilization = core.utilization();
        assert_eq!(utilization.num_active_nodes, 2);
        assert_eq!(utilization.num_closed_nodes, 2);
        assert!(utilization.capacity >= 4);

        core.clear();
        assert!(core.is_empty());
        assert_eq!(core.utilization().num_closed_nodes, 0);
        assert!(core.vacant_positions().is_empty());
    }
}
