use crate::{BinaryTree, MemoryPolicy, Node};
use alloc::vec::Vec;
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<T, M, P> Debug for BinaryTree<T, M, P>
where
    T: Debug,
    M: MemoryPolicy,
    P: PinnedVec<Node<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BinaryTree")
            .field("len", &self.len())
            .field("storage_len", &self.nodes().len())
            .field("vacant", &self.core().vacant_positions())
            .field("nodes", &self.nodes().iter().collect::<Vec<_>>())
            .finish()
    }
}
