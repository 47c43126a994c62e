//! The traversability grid.
//!
//! # Design
//!
//! Walkability is a flat row-major `Vec<bool>` (`idx = y * width + x`) —
//! grids are dense and small, so an indexed array beats any sparse
//! structure.  The maze is immutable after construction; every query takes a
//! [`Coordinate`] and bounds-checks it, so callers may probe positions off
//! the edge freely ([`is_walkable`][Maze::is_walkable] simply answers
//! `false` there).

use aco_core::Coordinate;

use crate::{MazeError, MazeResult};

/// An immutable `width × length` grid of walkable and blocked cells.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width:  usize,
    length: usize,
    /// Row-major walkability, `true` = walkable.
    cells:  Vec<bool>,
}

impl Maze {
    /// Build a maze from rows of walkability flags.
    ///
    /// Row `y` of the input becomes grid row `y` (y grows southward).  All
    /// rows must have the same non-zero width.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> MazeResult<Maze> {
        let length = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || length == 0 {
            return Err(MazeError::Dimensions("maze must have at least one cell".into()));
        }
        let mut cells = Vec::with_capacity(width * length);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::Dimensions(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Maze { width, length, cells })
    }

    /// An all-walkable grid — handy for demos and tests.
    pub fn open(width: usize, length: usize) -> Maze {
        Maze {
            width,
            length,
            cells: vec![true; width * length],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// `true` if `at` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, at: Coordinate) -> bool {
        (0..self.width as i32).contains(&at.x) && (0..self.length as i32).contains(&at.y)
    }

    /// `true` if `at` is on the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, at: Coordinate) -> bool {
        self.in_bounds(at) && self.cells[self.idx(at)]
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&walkable| walkable).count()
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    fn idx(&self, at: Coordinate) -> usize {
        at.y as usize * self.width + at.x as usize
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} maze, {} walkable cells",
            self.width,
            self.length,
            self.walkable_count()
        )
    }
}
