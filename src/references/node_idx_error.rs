use core::fmt::{Debug, Display};

/// Error cases of an invalid node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// RemovedNode => Referenced node is removed from the tree.
    /// Node index can only be used while the corresponding node still belongs to the tree.
    /// Note that this is also the case when the storage slot of the removed node is re-used by a new node.
    RemovedNode,
    /// WrongCollection => Node index is used on a tree which is different than the tree it is created for.
    WrongCollection,
    /// ReorganizedCollection => Nodes of the tree are cleared or re-organized after the index is created.
    ReorganizedCollection,
}

impl Display for NodeIdxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <NodeIdxError as Debug>::fmt(self, f)
    }
}

impl core::error::Error for NodeIdxError {}
