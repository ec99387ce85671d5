mod array;
mod node_idx;
mod node_idx_error;
mod owned_node;
mod refs;
mod single;

pub use array::RefsArray;
pub use node_idx::NodeIdx;
pub use node_idx_error::NodeIdxError;
pub use owned_node::OwnedNode;
pub use refs::Refs;
pub use single::RefsSingle;
