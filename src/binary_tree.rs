use crate::{
    CollectionKey, CoreTree, MemoryPolicy, MemoryReclaimNever, MemoryState, Node, NodeIdx,
    NodeIdxError, OwnedNode, Refs, Side, Utilization, memory::DroppedHandles,
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::SplitVec;

/// `BinaryTree` is the arena holding the nodes of binary trees where each node exclusively owns its
/// left and right children and knows its parent through a non-owning reference.
///
/// Nodes are addressed by:
/// * [`OwnedNode`]: the unique owning handle of a node which does not have a parent, the root of a detached subtree;
/// * [`NodeIdx`]: a copyable, non-owning and validated index of any node.
///
/// Parent and child links are positions within the pinned storage of the arena.
/// Therefore, the tree can never contain a reference cycle keeping nodes alive, and dropping the arena
/// drops all nodes without recursion regardless of the depth of the trees.
///
/// A subtree whose owning handle is dropped is destroyed by the arena at the beginning of its next
/// mutating operation. Owning handles share this list of dropped subtrees with the arena;
/// hence, the arena is neither `Send` nor `Sync`.
///
/// The arena is defined by the following generic arguments:
/// * `T`: type of the values stored in the nodes.
/// * `M`: memory policy deciding whether or not positions of removed nodes are re-used, [`MemoryReclaimNever`] by default.
/// * `P`: pinned vector storage of the nodes, [`SplitVec`] by default.
///
/// # Examples
///
/// ```rust
/// use orx_bintree_node::*;
///
/// let mut tree: BinaryTree<char> = BinaryTree::new();
///
/// let b = tree.create_leaf('b');
/// let c = tree.create_leaf('c');
/// let (b_idx, c_idx) = (b.idx(), c.idx());
///
/// let a = tree.fork('a', Some(b), Some(c));
/// let a_idx = a.idx();
///
/// assert_eq!(tree.left(&a_idx), Some(b_idx));
/// assert_eq!(tree.parent(&c_idx), Some(a_idx));
///
/// let b = tree.replace_left_with_leaf(&a_idx, 'd').unwrap();
/// assert_eq!(b.idx(), b_idx);
/// assert!(!tree.has_parent(&b_idx));
/// assert_eq!(tree.left(&a_idx).map(|x| *tree.value(&x)), Some('d'));
///
/// assert_eq!(tree.release(b), 'b');
/// assert_eq!(tree.try_value(&b_idx), Err(NodeIdxError::RemovedNode));
/// ```
pub struct BinaryTree<T, M = MemoryReclaimNever, P = SplitVec<Node<T>>>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    core: CoreTree<T, P>,
    key: CollectionKey,
    state: MemoryState,
    dropped: DroppedHandles<T>,
    phantom: PhantomData<M>,
}

impl<T, M, P> Default for BinaryTree<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M, P> BinaryTree<T, M, P>
where
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    /// Creates a new empty tree.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_storage(P::default())
    }

    /// Creates a new empty tree storing its nodes in the given pinned vector of `nodes`.
    ///
    /// Any element of `nodes` is dropped.
    pub fn with_storage(nodes: P) -> Self {
        Self::from_raw_parts(
            CoreTree::with_storage(nodes),
            CollectionKey::unique(),
            MemoryState::default(),
            DroppedHandles::default(),
        )
    }

    pub(crate) fn from_raw_parts(
        core: CoreTree<T, P>,
        key: CollectionKey,
        state: MemoryState,
        dropped: DroppedHandles<T>,
    ) -> Self {
        Self {
            core,
            key,
            state,
            dropped,
            phantom: PhantomData,
        }
    }

    /// Destructs the tree into its core storage, key, memory state and dropped handles.
    pub(crate) fn into_inner(
        self,
    ) -> (CoreTree<T, P>, CollectionKey, MemoryState, DroppedHandles<T>) {
        (self.core, self.key, self.state, self.dropped)
    }

    // get

    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns whether or not the tree has any node.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Returns current node utilization of the underlying storage.
    pub fn utilization(&self) -> Utilization {
        self.core.utilization()
    }

    /// Returns the current memory state of the tree.
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Returns a reference to the underlying nodes storage.
    pub fn nodes(&self) -> &P {
        self.core.nodes()
    }

    pub(crate) fn core(&self) -> &CoreTree<T, P> {
        &self.core
    }

    // index

    /// Returns true only if the `idx` is valid for this tree.
    pub fn is_valid(&self, idx: &NodeIdx<T>) -> bool {
        self.try_position(idx).is_ok()
    }

    /// Returns the reason why the `idx` is invalid for this tree; None if it is valid.
    pub fn invalidity_reason(&self, idx: &NodeIdx<T>) -> Option<NodeIdxError> {
        self.try_position(idx).err()
    }

    fn try_position(&self, idx: &NodeIdx<T>) -> Result<usize, NodeIdxError> {
        idx.resolve(self.key, self.state, self.core.nodes())
    }

    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    fn position(&self, idx: &NodeIdx<T>) -> usize {
        self.try_position(idx)
            .expect("node index must be valid for the tree")
    }

    fn idx_at(&self, position: usize) -> NodeIdx<T> {
        let generation = self.core.node_at(position).generation();
        NodeIdx::new(self.key, self.state, position, generation)
    }

    fn owned_at(&self, position: usize) -> OwnedNode<T> {
        OwnedNode::new(self.idx_at(position), self.dropped.clone())
    }

    /// Returns a reference to the node with the given `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn node(&self, idx: &NodeIdx<T>) -> &Node<T> {
        self.core.node_at(self.position(idx))
    }

    /// Returns a reference to the node with the given `idx`; or the reason why the index is invalid.
    pub fn try_node(&self, idx: &NodeIdx<T>) -> Result<&Node<T>, NodeIdxError> {
        self.try_position(idx).map(|p| self.core.node_at(p))
    }

    // construction

    fn push(&mut self, value: T) -> usize {
        match M::vacant_position(&mut self.core) {
            Some(vacant) => self.core.reopen(vacant, value),
            None => self.core.push(value),
        }
    }

    /// Creates a new node with the given `value`, without children or parent,
    /// and returns the owning handle of it.
    pub fn create_leaf(&mut self, value: T) -> OwnedNode<T> {
        self.release_dropped();
        let position = self.push(value);
        self.owned_at(position)
    }

    /// Creates a new node with the given `value` having the `left` and `right` subtrees as its children,
    /// and returns the owning handle of it.
    ///
    /// Roots of the subtrees become children of the new node, and the new node becomes their parent.
    ///
    /// # Panics
    ///
    /// Panics if either of the owning handles does not belong to this tree or is no longer valid.
    pub fn fork(
        &mut self,
        value: T,
        left: Option<OwnedNode<T>>,
        right: Option<OwnedNode<T>>,
    ) -> OwnedNode<T> {
        self.release_dropped();

        let children = [left, right];
        let positions = children
            .each_ref()
            .map(|x| x.as_ref().map(|x| self.detached_position(x)));
        for child in children.into_iter().flatten() {
            let _ = child.into_idx();
        }

        let position = self.push(value);
        for (side, child) in Side::BOTH.into_iter().zip(positions) {
            let replaced = self.set_child(position, side, child);
            debug_assert!(replaced.is_none());
        }
        self.owned_at(position)
    }

    // inspection

    /// Returns a reference to the value of the node with the given `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn value(&self, idx: &NodeIdx<T>) -> &T {
        self.node(idx).data().expect("active node")
    }

    /// Returns a mutable reference to the value of the node with the given `idx`.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn value_mut(&mut self, idx: &NodeIdx<T>) -> &mut T {
        self.release_dropped();
        let position = self.position(idx);
        self.core
            .node_mut_at(position)
            .data_mut()
            .expect("active node")
    }

    /// Returns a reference to the value of the node with the given `idx`; or the reason why the index is invalid.
    pub fn try_value(&self, idx: &NodeIdx<T>) -> Result<&T, NodeIdxError> {
        self.try_node(idx)
            .and_then(|node| node.data().ok_or(NodeIdxError::RemovedNode))
    }

    /// Returns a mutable reference to the value of the node with the given `idx`; or the reason why the index is invalid.
    pub fn try_value_mut(&mut self, idx: &NodeIdx<T>) -> Result<&mut T, NodeIdxError> {
        self.release_dropped();
        let position = self.try_position(idx)?;
        self.core
            .node_mut_at(position)
            .data_mut()
            .ok_or(NodeIdxError::RemovedNode)
    }

    /// Returns true if the node with the given `idx` has a child on the given `side`.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn has_child(&self, idx: &NodeIdx<T>, side: Side) -> bool {
        self.node(idx).has_child(side)
    }

    /// Returns true if the node with the given `idx` has a left child.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn has_left(&self, idx: &NodeIdx<T>) -> bool {
        self.has_child(idx, Side::Left)
    }

    /// Returns true if the node with the given `idx` has a right child.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn has_right(&self, idx: &NodeIdx<T>) -> bool {
        self.has_child(idx, Side::Right)
    }

    /// Returns true if the node with the given `idx` is attached to a parent.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn has_parent(&self, idx: &NodeIdx<T>) -> bool {
        self.parent(idx).is_some()
    }

    /// Returns the index of the child on the given `side` of the node with the given `idx`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn child(&self, idx: &NodeIdx<T>, side: Side) -> Option<NodeIdx<T>> {
        self.node(idx).child(side).map(|c| self.idx_at(c))
    }

    /// Returns the index of the left child of the node with the given `idx`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn left(&self, idx: &NodeIdx<T>) -> Option<NodeIdx<T>> {
        self.child(idx, Side::Left)
    }

    /// Returns the index of the right child of the node with the given `idx`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn right(&self, idx: &NodeIdx<T>) -> Option<NodeIdx<T>> {
        self.child(idx, Side::Right)
    }

    /// Returns the index of the parent of the node with the given `idx`;
    /// None if the node is not attached to a parent.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn parent(&self, idx: &NodeIdx<T>) -> Option<NodeIdx<T>> {
        self.node(idx)
            .parent()
            .get()
            .filter(|&p| self.core.node_at(p).is_active())
            .map(|p| self.idx_at(p))
    }

    // mutation

    /// Sets the child on the given `side` of the node with the given `idx` to `new_child`,
    /// and returns the owning handle of the prior child, if any.
    ///
    /// * The parent of `new_child`, if any, becomes this node.
    /// * The prior child is detached; it no longer has a parent, and the caller becomes its owner.
    ///
    /// Passing None as the `new_child` removes the child.
    ///
    /// # Panics
    ///
    /// Panics if:
    /// * the `idx` or the `new_child` is invalid for this tree, or
    /// * the node with the given `idx` belongs to the subtree of `new_child`, which would create a cycle.
    pub fn replace_child(
        &mut self,
        idx: &NodeIdx<T>,
        side: Side,
        new_child: Option<OwnedNode<T>>,
    ) -> Option<OwnedNode<T>> {
        self.release_dropped();
        let position = self.position(idx);
        let new_child = new_child.map(|x| self.attachable_position(position, x));
        self.set_child(position, side, new_child)
    }

    /// Sets the child on the given `side` of the node at `position` to the detached node at the
    /// `new_child` position, and returns the owning handle of the prior child, if any.
    fn set_child(
        &mut self,
        position: usize,
        side: Side,
        new_child: Option<usize>,
    ) -> Option<OwnedNode<T>> {
        if let Some(child) = new_child {
            self.core.node_mut_at(child).parent_mut().set_some(position);
        }

        let old_child = self.core.node_at(position).child(side);
        if let Some(child) = old_child {
            self.core.node_mut_at(child).parent_mut().set_none();
        }

        let replaced = self
            .core
            .node_mut_at(position)
            .children_mut()
            .replace(side.ref_idx(), new_child);
        debug_assert_eq!(replaced, old_child);

        old_child.map(|x| self.owned_at(x))
    }

    /// Sets the left child of the node with the given `idx` to `new_child`,
    /// and returns the owning handle of the prior left child, if any.
    ///
    /// # Panics
    ///
    /// Panics if:
    /// * the `idx` or the `new_child` is invalid for this tree, or
    /// * the node with the given `idx` belongs to the subtree of `new_child`.
    pub fn replace_left(
        &mut self,
        idx: &NodeIdx<T>,
        new_child: Option<OwnedNode<T>>,
    ) -> Option<OwnedNode<T>> {
        self.replace_child(idx, Side::Left, new_child)
    }

    /// Sets the right child of the node with the given `idx` to `new_child`,
    /// and returns the owning handle of the prior right child, if any.
    ///
    /// # Panics
    ///
    /// Panics if:
    /// * the `idx` or the `new_child` is invalid for this tree, or
    /// * the node with the given `idx` belongs to the subtree of `new_child`.
    pub fn replace_right(
        &mut self,
        idx: &NodeIdx<T>,
        new_child: Option<OwnedNode<T>>,
    ) -> Option<OwnedNode<T>> {
        self.replace_child(idx, Side::Right, new_child)
    }

    /// Sets the left child of the node with the given `idx` to a new leaf with the given `value`,
    /// and returns the owning handle of the prior left child, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn replace_left_with_leaf(&mut self, idx: &NodeIdx<T>, value: T) -> Option<OwnedNode<T>> {
        self.replace_with_leaf(idx, Side::Left, value)
    }

    /// Sets the right child of the node with the given `idx` to a new leaf with the given `value`,
    /// and returns the owning handle of the prior right child, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn replace_right_with_leaf(&mut self, idx: &NodeIdx<T>, value: T) -> Option<OwnedNode<T>> {
        self.replace_with_leaf(idx, Side::Right, value)
    }

    fn replace_with_leaf(
        &mut self,
        idx: &NodeIdx<T>,
        side: Side,
        value: T,
    ) -> Option<OwnedNode<T>> {
        self.release_dropped();
        let position = self.position(idx);
        let leaf = self.push(value);
        self.set_child(position, side, Some(leaf))
    }

    /// Removes the left child of the node with the given `idx`,
    /// and returns the owning handle of it, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn remove_left(&mut self, idx: &NodeIdx<T>) -> Option<OwnedNode<T>> {
        self.replace_child(idx, Side::Left, None)
    }

    /// Removes the right child of the node with the given `idx`,
    /// and returns the owning handle of it, if any.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn remove_right(&mut self, idx: &NodeIdx<T>) -> Option<OwnedNode<T>> {
        self.replace_child(idx, Side::Right, None)
    }

    /// Detaches the node with the given `idx` from its parent and returns the owning handle of it;
    /// None if the node does not have a parent, in which case it is already owned by an `OwnedNode`.
    ///
    /// # Panics
    ///
    /// Panics if the `idx` is invalid for this tree.
    pub fn detach(&mut self, idx: &NodeIdx<T>) -> Option<OwnedNode<T>> {
        self.release_dropped();
        let position = self.position(idx);
        let parent = self.core.node_at(position).parent().get()?;

        let ref_idx = self.core.node_mut_at(parent).children_mut().remove(position);
        debug_assert!(ref_idx.is_some());
        self.core.node_mut_at(position).parent_mut().set_none();

        Some(self.owned_at(position))
    }

    // destruction

    /// Destroys all nodes of the detached `subtree`, and returns the value of its root.
    ///
    /// Nodes are released iteratively; hence, very deep subtrees can be released safely.
    ///
    /// # Panics
    ///
    /// Panics if the `subtree` does not belong to this tree or is no longer valid.
    pub fn release(&mut self, subtree: OwnedNode<T>) -> T {
        let idx = subtree.into_idx();
        self.release_dropped();
        let root = self.position(&idx);
        self.release_at(root)
    }

    /// Destroys the subtrees whose owning handles are dropped without being attached or released,
    /// and returns the number of destroyed subtrees.
    ///
    /// This is carried out at the beginning of every mutating operation of the tree; therefore,
    /// it is required only to observe the effect immediately, such as the `len` of the tree.
    pub fn release_dropped(&mut self) -> usize {
        let mut num_released = 0;
        while !self.dropped.is_empty() {
            for idx in self.dropped.take() {
                let root = self
                    .try_position(&idx)
                    .ok()
                    .filter(|&p| !self.core.node_at(p).has_parent());
                if let Some(root) = root {
                    let _ = self.release_at(root);
                    num_released += 1;
                }
            }
        }
        num_released
    }

    /// Closes all nodes of the subtree rooted at the detached node at the `root` position,
    /// and returns the value of the root.
    fn release_at(&mut self, root: usize) -> T {
        debug_assert!(!self.core.node_at(root).has_parent());

        let mut to_close: Vec<usize> = self.core.node_at(root).children().iter().collect();
        while let Some(position) = to_close.pop() {
            to_close.extend(self.core.node_at(position).children().iter());
            let _ = self.core.close(position);
        }

        self.core.close(root)
    }

    /// Destroys all nodes of the tree.
    ///
    /// The tree moves to a new memory state; hence, all node indices and owning handles
    /// created before are invalidated.
    pub fn clear(&mut self) {
        let _ = self.dropped.take();
        self.core.clear();
        self.state = self.state.successor_state();
    }

    // helpers

    /// Returns the position of the root of the subtree that the node at the given `position` belongs to.
    fn root_position(&self, mut position: usize) -> usize {
        while let Some(parent) = self.core.node_at(position).parent().get() {
            position = parent;
        }
        position
    }

    /// Validates the owned `node` and returns its position.
    ///
    /// # Panics
    ///
    /// Panics if the `node` is invalid for this tree.
    fn detached_position(&self, node: &OwnedNode<T>) -> usize {
        let position = self.position(&node.idx());
        assert!(
            !self.core.node_at(position).has_parent(),
            "owned node must be the root of a detached subtree"
        );
        position
    }

    /// Validates the `child` to be attached under the node at the `parent` position, takes over
    /// its ownership and returns its position.
    ///
    /// Only a child with children of its own requires walking up to the root of the `parent`;
    /// a leaf can only contain the `parent` if it is the `parent` itself.
    ///
    /// # Panics
    ///
    /// Panics if the `child` is invalid for this tree or if `parent` belongs to the subtree of the `child`.
    fn attachable_position(&self, parent: usize, child: OwnedNode<T>) -> usize {
        let position = self.detached_position(&child);
        let contains_parent = match self.core.node_at(position).children().is_empty() {
            true => parent == position,
            false => self.root_position(parent) == position,
        };
        assert!(
            !contains_parent,
            "a subtree cannot be attached below one of its own nodes"
        );
        let _ = child.into_idx();
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryReclaimAlways;
    use alloc::string::{String, ToString};

    #[test]
    fn new_tree() {
        let tree: BinaryTree<String> = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.memory_state(), MemoryState::default());

        let tree: BinaryTree<String, MemoryReclaimAlways> = Default::default();
        assert!(tree.is_empty());
    }

    #[test]
    fn fork_sets_parent_of_both_children() {
        let mut tree: BinaryTree<u32> = BinaryTree::new();

        let left = tree.create_leaf(1);
        let right = tree.create_leaf(2);
        let (l, r) = (left.idx(), right.idx());

        let root = tree.fork(0, Some(left), Some(right));
        let root = root.idx();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.left(&root), Some(l));
        assert_eq!(tree.right(&root), Some(r));
        assert_eq!(tree.parent(&l), Some(root));
        assert_eq!(tree.parent(&r), Some(root));
        assert!(!tree.has_parent(&root));
    }

    #[test]
    fn released_node_is_removed() {
        let mut tree: BinaryTree<String> = BinaryTree::new();
        let a = tree.create_leaf("a".to_string());
        let a_idx = a.idx();
        assert_eq!(tree.release(a), "a");

        assert_eq!(tree.len(), 0);
        assert_eq!(tree.try_node(&a_idx).err(), Some(NodeIdxError::RemovedNode));
        assert_eq!(tree.try_value(&a_idx), Err(NodeIdxError::RemovedNode));
    }

    #[test]
    #[should_panic]
    fn replace_with_leaf_on_removed_node() {
        let mut tree: BinaryTree<String> = BinaryTree::new();
        let a = tree.create_leaf("a".to_string());
        let a_idx = a.idx();
        let _ = tree.release(a);

        let _ = tree.replace_left_with_leaf(&a_idx, "b".to_string());
    }

    #[test]
    fn detach() {
        let mut tree: BinaryTree<char> = BinaryTree::new();
        let b = tree.create_leaf('b');
        let b_idx = b.idx();
        let a = tree.fork('a', None, Some(b));
        let a_idx = a.idx();

        assert!(tree.detach(&a_idx).is_none());

        let b = tree.detach(&b_idx).unwrap();
        assert_eq!(b.idx(), b_idx);
        assert!(!tree.has_parent(&b_idx));
        assert!(!tree.has_right(&a_idx));
        assert!(tree.detach(&b_idx).is_none());

        assert_eq!(tree.release(b), 'b');
        assert_eq!(tree.release(a), 'a');
        assert!(tree.is_empty());
    }

    #[test]
    fn root_position() {
        let mut tree: BinaryTree<u32> = BinaryTree::new();
        let c = tree.create_leaf(2);
        let c_idx = c.idx();
        let b = tree.fork(1, Some(c), None);
        let a = tree.fork(0, None, Some(b));

        assert_eq!(tree.root_position(c_idx.position()), a.idx().position());
        assert_eq!(tree.root_position(a.idx().position()), a.idx().position());
    }
}
