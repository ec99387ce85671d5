use super::policy::MemoryPolicy;
use crate::{CoreTree, Node};
use orx_pinned_vec::PinnedVec;

/// A do-nothing `MemoryPolicy` which never re-uses the positions of the closed nodes,
/// leaving them as holes in the underlying storage.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl MemoryPolicy for MemoryReclaimNever {
    #[inline(always)]
    fn vacant_position<T, P>(_core: &mut CoreTree<T, P>) -> Option<usize>
    where
        P: PinnedVec<Node<T>>,
    {
        None
    }
}
