//! The four cardinal moves a walker can make on the grid.
//!
//! The y axis grows **southward** (row index), so `North` decrements y and
//! `South` increments it.  [`Direction::ALL`] fixes the canonical reading
//! order (north, east, south, west) used everywhere a per-direction array is
//! built; [`Direction::index`] is the position within that order.

use std::str::FromStr;

use crate::AcoError;

/// One unit move between 4-connected grid cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in canonical reading order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position within [`Direction::ALL`] — index for per-direction arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East  => 1,
            Direction::South => 2,
            Direction::West  => 3,
        }
    }

    /// The move that undoes this one.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
        }
    }

    /// `(dx, dy)` offset of one step.  y grows southward.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East  => (1, 0),
            Direction::South => (0, 1),
            Direction::West  => (-1, 0),
        }
    }

    /// Lowercase token, as written to route files.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
        }
    }
}

impl FromStr for Direction {
    type Err = AcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "east"  => Ok(Direction::East),
            "south" => Ok(Direction::South),
            "west"  => Ok(Direction::West),
            other => Err(AcoError::Parse(format!(
                "invalid direction {other:?}: expected \"north\", \"east\", \"south\", or \"west\""
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
