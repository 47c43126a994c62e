//! `aco-maze` — maze grid, pheromone field, and text loaders for the
//! `rust_aco` maze pathfinder.
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`maze`]      | `Maze` — the immutable walkability grid                |
//! | [`pheromone`] | `PheromoneField`, `SurroundingScent`                   |
//! | [`path_spec`] | `PathSpec` — the start/goal cell pair                  |
//! | [`loader`]    | Text-file loaders for mazes and path specs             |
//! | [`error`]     | `MazeError`, `MazeResult`                              |
//!
//! The maze never changes after construction; all mutable search state lives
//! in the [`PheromoneField`], which walkers read through shared borrows and
//! the colony rewrites between generations.

pub mod error;
pub mod loader;
pub mod maze;
pub mod path_spec;
pub mod pheromone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MazeError, MazeResult};
pub use loader::{load_maze, load_path_spec, parse_maze_reader, parse_path_spec_reader};
pub use maze::Maze;
pub use path_spec::PathSpec;
pub use pheromone::{PheromoneField, SurroundingScent};
