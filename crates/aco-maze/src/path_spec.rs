//! The start/goal cell pair a colony searches between.

use aco_core::Coordinate;

use crate::{Maze, MazeError, MazeResult};

/// Where every walker starts and where it is trying to get.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSpec {
    pub start: Coordinate,
    pub end:   Coordinate,
}

impl PathSpec {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Check that both endpoints are on the grid and walkable.
    pub fn validate(&self, maze: &Maze) -> MazeResult<()> {
        for (which, at) in [("start", self.start), ("end", self.end)] {
            if !maze.in_bounds(at) {
                return Err(MazeError::EndpointOutOfBounds {
                    which,
                    at,
                    width:  maze.width(),
                    length: maze.length(),
                });
            }
            if !maze.is_walkable(at) {
                return Err(MazeError::EndpointBlocked { which, at });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for PathSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
