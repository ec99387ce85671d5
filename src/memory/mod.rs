mod always;
mod dropped;
mod key;
mod never;
mod policy;
mod state;
mod utilization;

pub use always::MemoryReclaimAlways;
pub(crate) use dropped::DroppedHandles;
pub use key::CollectionKey;
pub use never::MemoryReclaimNever;
pub use policy::MemoryPolicy;
pub use state::MemoryState;
pub use utilization::Utilization;
