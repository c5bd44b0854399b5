//! Board position representation.

use std::fmt::{self, Display};

/// A zero-based board coordinate.
///
/// `row` counts from the top, `col` from the left. Positions are plain
/// values; whether a position fits on a board depends on the board's
/// [`Layout`](crate::Layout), checked wherever a position is consumed.
///
/// # Examples
///
/// ```
/// use varidoku_core::Pos;
///
/// let pos = Pos::new(2, 7);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 7);
/// assert_eq!(pos.to_string(), "(2, 7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Pos {
    /// Creates a position from row and column indices.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
