//! A walk across the grid, stored as a start cell plus relative moves.
//!
//! # Design
//!
//! Only the start coordinate and the direction list are stored.  Absolute
//! cell positions are derived on demand by [`Route::coordinates`], so a route
//! can never hold a coordinate sequence that disagrees with its own steps.
//! Route length (= step count) is the cost measure everywhere: the shortest
//! route is the one with the fewest steps.

use crate::{Coordinate, Direction};

/// An ordered sequence of moves starting at a fixed cell.
///
/// A route fresh from a walker may revisit cells; simplification produces a
/// route that never does.  Both are represented by this one type.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// The cell the route begins at.
    pub start: Coordinate,
    /// Relative moves, in walk order.
    pub steps: Vec<Direction>,
}

impl Route {
    /// An empty route anchored at `start`.
    pub fn new(start: Coordinate) -> Self {
        Self { start, steps: Vec::new() }
    }

    /// Append one move.
    #[inline]
    pub fn push(&mut self, dir: Direction) {
        self.steps.push(dir);
    }

    /// Number of moves — the route's cost.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for a zero-length route (start and end coincide).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The cell the route finishes at.
    pub fn end(&self) -> Coordinate {
        self.steps.iter().fold(self.start, |at, &dir| at + dir)
    }

    /// Every cell the route touches, starting with `start` — derived, never
    /// stored.  Yields `len() + 1` coordinates.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let mut at = self.start;
        std::iter::once(self.start).chain(self.steps.iter().map(move |&dir| {
            at = at + dir;
            at
        }))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} +{} steps -> {}", self.start, self.len(), self.end())
    }
}
