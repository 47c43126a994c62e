//! Grid cell coordinate.
//!
//! Coordinates are signed so that stepping off the grid edge is representable
//! (e.g. `(0, 0) + West` is `(-1, 0)`); every grid and field access performs
//! its own bounds check rather than trusting the coordinate.

use crate::Direction;

/// A cell position: `x` is the column, `y` the row.  y grows southward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add<Direction> for Coordinate {
    type Output = Coordinate;

    /// The neighboring cell one step in `dir`.
    #[inline]
    fn add(self, dir: Direction) -> Coordinate {
        let (dx, dy) = dir.delta();
        Coordinate { x: self.x + dx, y: self.y + dy }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
