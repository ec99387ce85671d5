use super::refs::Refs;

/// A single node reference, such as the parent of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefsSingle(Option<usize>);

impl Refs for RefsSingle {
    #[inline(always)]
    fn empty() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline(always)]
    fn clear(&mut self) {
        _ = self.0.take();
    }
}

impl RefsSingle {
    /// Returns the position of the referenced node.
    pub fn get(&self) -> Option<usize> {
        self.0
    }

    /// Sets the reference to the node at the given `position`.
    pub(crate) fn set_some(&mut self, position: usize) {
        self.0 = Some(position)
    }

    /// Un-sets the reference.
    pub(crate) fn set_none(&mut self) {
        self.0 = None
    }
}
