use crate::{BinaryTree, CollectionKey, MemoryPolicy, MemoryState, Node, NodeIdxError};
use core::{fmt::Debug, marker::PhantomData};
use orx_pinned_vec::PinnedVec;

/// A node index providing safe and constant time access to nodes of a binary tree.
///
/// A node index is a non-owning reference. It can be copied and stored freely; it never
/// keeps the node alive. Whenever it is used, it is validated against the tree:
///
/// * it must be created by the same tree,
/// * the tree must not be cleared since the index was created,
/// * the node must not be removed since the index was created.
///
/// Invalid indices are never resolved to another node, even when the storage slot of a
/// removed node is re-used.
pub struct NodeIdx<T> {
    key: CollectionKey,
    state: MemoryState,
    position: usize,
    generation: usize,
    phantom: PhantomData<fn() -> T>,
}

impl<T> core::hash::Hash for NodeIdx<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.state.hash(state);
        self.position.hash(state);
        self.generation.hash(state);
    }
}

// Only the position is copied, so "T" does not need to be copy itself.
impl<T> Copy for NodeIdx<T> {}

impl<T> Clone for NodeIdx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Debug for NodeIdx<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("position", &self.position)
            .field("generation", &self.generation)
            .field("state", &self.state)
            .finish()
    }
}

impl<T> PartialEq for NodeIdx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.generation == other.generation
            && self.state == other.state
            && self.key == other.key
    }
}

impl<T> Eq for NodeIdx<T> {}

impl<T> NodeIdx<T> {
    #[inline(always)]
    pub(crate) fn new(
        key: CollectionKey,
        state: MemoryState,
        position: usize,
        generation: usize,
    ) -> Self {
        Self {
            key,
            state,
            position,
            generation,
            phantom: PhantomData,
        }
    }

    /// Returns the position of the node in the underlying storage of the tree.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Checks whether or not the `state` of the index matches the given memory `state`.
    #[inline(always)]
    pub fn is_in_state(&self, state: MemoryState) -> bool {
        self.state == state
    }

    /// Resolves this index to a position of the given `nodes`, which belong to the tree
    /// with the given `key` and memory `state`.
    pub(crate) fn resolve<P>(
        &self,
        key: CollectionKey,
        state: MemoryState,
        nodes: &P,
    ) -> Result<usize, NodeIdxError>
    where
        P: PinnedVec<Node<T>>,
    {
        if self.key != key {
            return Err(NodeIdxError::WrongCollection);
        }

        if self.state != state {
            return Err(NodeIdxError::ReorganizedCollection);
        }

        // storage never shrinks within a memory state
        match nodes.get(self.position) {
            Some(node) if node.is_active() && node.generation() == self.generation => {
                Ok(self.position)
            }
            _ => Err(NodeIdxError::RemovedNode),
        }
    }

    /// Returns true only if this index is valid for the given `tree`.
    #[inline(always)]
    pub fn is_valid_for<M, P>(&self, tree: &BinaryTree<T, M, P>) -> bool
    where
        M: MemoryPolicy,
        P: PinnedVec<Node<T>>,
    {
        tree.is_valid(self)
    }

    /// Returns the reason why this index is invalid for the given `tree`;
    /// None if the index is valid.
    pub fn invalidity_reason_for<M, P>(&self, tree: &BinaryTree<T, M, P>) -> Option<NodeIdxError>
    where
        M: MemoryPolicy,
        P: PinnedVec<Node<T>>,
    {
        tree.invalidity_reason(self)
    }
}
