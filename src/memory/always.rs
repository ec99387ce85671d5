use super::policy::MemoryPolicy;
use crate::{CoreTree, Node};
use orx_pinned_vec::PinnedVec;

/// A `MemoryPolicy` which places each new node into the position of the most recently closed node,
/// if any.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimAlways;

impl MemoryPolicy for MemoryReclaimAlways {
    #[inline(always)]
    fn vacant_position<T, P>(core: &mut CoreTree<T, P>) -> Option<usize>
    where
        P: PinnedVec<Node<T>>,
    {
        core.pop_vacant()
    }
}
