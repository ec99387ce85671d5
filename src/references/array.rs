use super::refs::Refs;
use core::fmt::Debug;

/// A constant number of optional node references, such as the children of a binary tree node.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RefsArray<const N: usize>([Option<usize>; N]);

impl<const N: usize> Debug for RefsArray<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsArray").field(&self.0).finish()
    }
}

impl<const N: usize> Default for RefsArray<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> Refs for RefsArray<N> {
    #[inline(always)]
    fn empty() -> Self {
        Self([None; N])
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.iter().all(|x| x.is_none())
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.0.iter_mut().for_each(|x| *x = None);
    }
}

impl<const N: usize> RefsArray<N> {
    /// Returns the position of the node referenced at the `ref_idx`-th slot.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    pub fn get(&self, ref_idx: usize) -> Option<usize> {
        self.0[ref_idx]
    }

    /// Sets the `ref_idx`-th reference to the node at the given `position`
    /// and returns the previously referenced position.
    ///
    /// # Panics
    ///
    /// Panics if `ref_idx` is not less than `N`.
    pub(crate) fn replace(&mut self, ref_idx: usize, position: Option<usize>) -> Option<usize> {
        core::mem::replace(&mut self.0[ref_idx], position)
    }

    /// Removes the reference to the node at the given storage `position`.
    ///
    /// Returns the index of the removed reference among references if it exists; None otherwise.
    pub(crate) fn remove(&mut self, position: usize) -> Option<usize> {
        let ref_idx = self.0.iter().position(|x| *x == Some(position))?;
        self.0[ref_idx] = None;
        Some(ref_idx)
    }

    /// Returns an iterator over positions of the referenced nodes, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().flatten().copied()
    }
}
