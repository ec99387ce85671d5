use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_KEY: AtomicUsize = AtomicUsize::new(0);

/// Identity of a binary tree, shared by all node indices created by the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollectionKey(usize);

impl CollectionKey {
    /// Creates a key which is distinct from the keys of all other trees created so far.
    pub(crate) fn unique() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}
