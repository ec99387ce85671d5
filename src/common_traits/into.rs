use crate::{BinaryTree, MemoryReclaimAlways, MemoryReclaimNever, Node};
use orx_pinned_vec::PinnedVec;

impl<T, P> From<BinaryTree<T, MemoryReclaimNever, P>> for BinaryTree<T, MemoryReclaimAlways, P>
where
    P: PinnedVec<Node<T>>,
{
    fn from(value: BinaryTree<T, MemoryReclaimNever, P>) -> Self {
        let (core, key, state, dropped) = value.into_inner();
        Self::from_raw_parts(core, key, state, dropped)
    }
}

impl<T, P> From<BinaryTree<T, MemoryReclaimAlways, P>> for BinaryTree<T, MemoryReclaimNever, P>
where
    P: PinnedVec<Node<T>>,
{
    fn from(value: BinaryTree<T, MemoryReclaimAlways, P>) -> Self {
        let (core, key, state, dropped) = value.into_inner();
        Self::from_raw_parts(core, key, state, dropped)
    }
}
