use crate::{CoreTree, Node};
use orx_pinned_vec::PinnedVec;

/// Policy which determines whether or not storage positions of removed, or closed, nodes are re-used.
///
/// Two implementors are:
/// * [`MemoryReclaimNever`] never re-uses positions of closed nodes, leaving them as holes in the storage.
///   The storage only grows until the tree is cleared.
///   This fits well to situations where removals are not substantial.
/// * [`MemoryReclaimAlways`] places every new node into the position of a closed node whenever there exists one.
///   Storage does not grow as long as there exist holes.
///
/// Note that neither of the policies moves an active node.
/// Node indices of active nodes are valid under both policies;
/// and node indices of removed nodes are reported as removed under both policies,
/// since every position carries a generation that changes when its node is closed.
///
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
/// [`MemoryReclaimAlways`]: crate::MemoryReclaimAlways
pub trait MemoryPolicy: Clone + Default {
    /// Returns the position of a closed node that the next node will be placed into;
    /// None if the next node must be appended to the end of the storage.
    fn vacant_position<T, P>(core: &mut CoreTree<T, P>) -> Option<usize>
    where
        P: PinnedVec<Node<T>>;
}
