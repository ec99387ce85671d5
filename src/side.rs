/// Side of a child with respect to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left child.
    Left,
    /// Right child.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Position of the child reference within the children array of a node.
    #[inline(always)]
    pub(crate) const fn ref_idx(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}
