//! Grid coordinates
//!
//! Zero-based `(row, col)` positions. Ordering is row-major so sets of
//! coordinates iterate deterministically.

use std::fmt;

/// A zero-based grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies inside a `size` × `size` grid
    #[inline]
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Displays one-based, the way players count rows and columns
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row + 1, self.col + 1)
    }
}
