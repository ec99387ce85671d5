#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Node references.
pub mod references;

mod binary_tree;
mod common_traits;
mod core_tree;
mod memory;
mod node;
mod side;

pub use binary_tree::BinaryTree;
pub use core_tree::CoreTree;
pub use memory::{
    CollectionKey, MemoryPolicy, MemoryReclaimAlways, MemoryReclaimNever, MemoryState,
    Utilization,
};
pub use node::Node;
pub use references::{NodeIdx, NodeIdxError, OwnedNode};
pub use references::{Refs, RefsArray, RefsSingle};
pub use side::Side;
