//! Text-file loaders for mazes and path specs.
//!
//! # Maze format
//!
//! The first two tokens are the dimensions, then one `0`/`1` token per cell,
//! row by row (`1` = walkable).  Line breaks are cosmetic — any whitespace
//! separates tokens:
//!
//! ```text
//! 5 3
//! 1 1 1 1 1
//! 1 0 0 0 1
//! 1 1 1 1 1
//! ```
//!
//! # Path spec format
//!
//! Two coordinates, start then goal, `x, y;` per line.  Commas and
//! semicolons are treated as whitespace, so bare `x y` lines parse too:
//!
//! ```text
//! 0, 0;
//! 4, 2;
//! ```

use std::io::Read;
use std::path::Path;

use aco_core::Coordinate;

use crate::{Maze, MazeError, MazeResult, PathSpec};

// ── Maze ──────────────────────────────────────────────────────────────────────

/// Load a maze from a text file.
pub fn load_maze(path: &Path) -> MazeResult<Maze> {
    let file = std::fs::File::open(path)?;
    parse_maze_reader(file)
}

/// Like [`load_maze`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded maze text.
pub fn parse_maze_reader<R: Read>(mut reader: R) -> MazeResult<Maze> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();

    let width = parse_dimension(tokens.next(), "width")?;
    let length = parse_dimension(tokens.next(), "length")?;

    let mut rows = Vec::with_capacity(length);
    for y in 0..length {
        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            match tokens.next() {
                Some("1") => row.push(true),
                Some("0") => row.push(false),
                Some(other) => {
                    return Err(MazeError::Parse(format!(
                        "cell ({x}, {y}): expected \"0\" or \"1\", got {other:?}"
                    )));
                }
                None => {
                    return Err(MazeError::Parse(format!(
                        "ran out of cell tokens at ({x}, {y}); expected {} cells",
                        width * length
                    )));
                }
            }
        }
        rows.push(row);
    }

    if let Some(extra) = tokens.next() {
        return Err(MazeError::Parse(format!(
            "unexpected token {extra:?} after {} cells",
            width * length
        )));
    }

    Maze::from_rows(rows)
}

fn parse_dimension(token: Option<&str>, which: &str) -> MazeResult<usize> {
    let token =
        token.ok_or_else(|| MazeError::Dimensions(format!("missing {which}")))?;
    let value: usize = token.parse().map_err(|_| {
        MazeError::Dimensions(format!("{which} must be a positive integer, got {token:?}"))
    })?;
    if value == 0 {
        return Err(MazeError::Dimensions(format!("{which} must be at least 1")));
    }
    Ok(value)
}

// ── Path spec ─────────────────────────────────────────────────────────────────

/// Load a start/goal pair from a text file.
pub fn load_path_spec(path: &Path) -> MazeResult<PathSpec> {
    let file = std::fs::File::open(path)?;
    parse_path_spec_reader(file)
}

/// Like [`load_path_spec`] but accepts any `Read` source.
pub fn parse_path_spec_reader<R: Read>(mut reader: R) -> MazeResult<PathSpec> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    // Commas and semicolons are decoration in this format.
    let cleaned = text.replace([',', ';'], " ");
    let values: Vec<i32> = cleaned
        .split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| {
                MazeError::Parse(format!("expected an integer coordinate, got {token:?}"))
            })
        })
        .collect::<MazeResult<_>>()?;

    match values[..] {
        [sx, sy, ex, ey] => Ok(PathSpec::new(
            Coordinate::new(sx, sy),
            Coordinate::new(ex, ey),
        )),
        _ => Err(MazeError::Parse(format!(
            "expected exactly 4 coordinate values (start x y, end x y), got {}",
            values.len()
        ))),
    }
}
