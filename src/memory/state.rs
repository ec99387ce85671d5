/// Memory state of a binary tree.
///
/// The state changes whenever all nodes of the tree are dropped at once,
/// which invalidates every node index created before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    pub(crate) id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self {
            id: self.id.wrapping_add(1),
        }
    }
}
