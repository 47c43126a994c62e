//! The shared scent field walkers read and the colony rewrites.
//!
//! # Update rules
//!
//! The field starts at [`BASELINE`] on every walkable cell and 0 on every
//! blocked cell.  Between generations the colony applies, in order:
//!
//! 1. [`evaporate`][PheromoneField::evaporate] — every cell keeps a `1 - ρ`
//!    fraction of its intensity (exactly once per generation);
//! 2. [`reinforce`][PheromoneField::reinforce] — each finished route deposits
//!    `Q / route_len` on every cell it *enters* (one deposit per step, none
//!    for standing at the start), so shorter routes concentrate more scent
//!    per cell.
//!
//! Intensities never go negative: evaporation scales by a non-negative
//! factor and deposits only add.  Blocked cells stay at zero because routes
//! only ever enter walkable cells.

use aco_core::{Coordinate, Direction, Route};

use crate::Maze;

/// Initial intensity of every walkable cell.
///
/// A uniform positive baseline makes the first generation a pure random walk:
/// every open direction is equally likely until deposits skew the field.
pub const BASELINE: f64 = 1.0;

// ── SurroundingScent ──────────────────────────────────────────────────────────

/// The four scent readings around one cell, in reading order.
///
/// Off-grid neighbors read as 0, the same as blocked cells, so a walker needs
/// no separate edge handling.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurroundingScent {
    pub north: f64,
    pub east:  f64,
    pub south: f64,
    pub west:  f64,
}

impl SurroundingScent {
    /// The reading in one direction.
    #[inline]
    pub fn get(self, dir: Direction) -> f64 {
        match dir {
            Direction::North => self.north,
            Direction::East  => self.east,
            Direction::South => self.south,
            Direction::West  => self.west,
        }
    }

    /// Sum of all four readings.
    #[inline]
    pub fn total(self) -> f64 {
        self.north + self.east + self.south + self.west
    }
}

// ── PheromoneField ────────────────────────────────────────────────────────────

/// Per-cell scent intensities for one maze.
///
/// Same flat row-major layout as the maze itself.  The colony owns the field
/// and hands walkers shared borrows: the whole walker phase reads one frozen
/// snapshot, then the colony applies all writes sequentially.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneField {
    width:  usize,
    length: usize,
    cells:  Vec<f64>,
}

impl PheromoneField {
    /// A fresh field for `maze`: [`BASELINE`] on walkable cells, 0 on blocked.
    pub fn new(maze: &Maze) -> Self {
        let mut field = PheromoneField {
            width:  maze.width(),
            length: maze.length(),
            cells:  vec![0.0; maze.width() * maze.length()],
        };
        field.reset(maze);
        field
    }

    /// Re-baseline the field, discarding all accumulated scent.
    ///
    /// `maze` must be the maze the field was built for (same dimensions).
    pub fn reset(&mut self, maze: &Maze) {
        debug_assert_eq!(
            (self.width, self.length),
            (maze.width(), maze.length()),
            "field/maze dimension mismatch"
        );
        for y in 0..self.length {
            for x in 0..self.width {
                let at = Coordinate::new(x as i32, y as i32);
                self.cells[y * self.width + x] =
                    if maze.is_walkable(at) { BASELINE } else { 0.0 };
            }
        }
    }

    /// Intensity at `at`; 0 off the grid.
    #[inline]
    pub fn intensity(&self, at: Coordinate) -> f64 {
        match self.index_of(at) {
            Some(i) => self.cells[i],
            None    => 0.0,
        }
    }

    /// Read the scent of all four neighbors of `at`.
    pub fn surrounding_scent(&self, at: Coordinate) -> SurroundingScent {
        SurroundingScent {
            north: self.intensity(at + Direction::North),
            east:  self.intensity(at + Direction::East),
            south: self.intensity(at + Direction::South),
            west:  self.intensity(at + Direction::West),
        }
    }

    /// Decay every cell by the factor `1 - rate`.
    ///
    /// `rate` may be anything in `[0, 1]` here; colony configs restrict runs
    /// to `[0, 1)` so the field never zeroes out wholesale.
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!(
            (0.0..=1.0).contains(&rate),
            "evaporation rate out of range: {rate}"
        );
        let keep = 1.0 - rate;
        for cell in &mut self.cells {
            *cell *= keep;
        }
    }

    /// Deposit `deposit_total / route.len()` on every cell the route enters.
    ///
    /// One deposit per step: nothing lands for standing at the start, but a
    /// step that re-enters the start cell deposits like any other.  A
    /// zero-length route deposits nothing at all (in particular, no division
    /// by zero).  Off-grid steps in a hand-built route are skipped quietly.
    pub fn reinforce(&mut self, route: &Route, deposit_total: f64) {
        if route.is_empty() {
            return;
        }
        let amount = deposit_total / route.len() as f64;
        let mut at = route.start;
        for &dir in &route.steps {
            at = at + dir;
            if let Some(i) = self.index_of(at) {
                self.cells[i] += amount;
            }
        }
    }

    /// Flat index of `at`, or `None` off the grid.
    #[inline]
    fn index_of(&self, at: Coordinate) -> Option<usize> {
        if (0..self.width as i32).contains(&at.x) && (0..self.length as i32).contains(&at.y) {
            Some(at.y as usize * self.width + at.x as usize)
        } else {
            None
        }
    }
}
