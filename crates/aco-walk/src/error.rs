use aco_core::Coordinate;
use thiserror::Error;

/// Ways a single walk can end without reaching the goal.
///
/// Neither case is fatal to a colony run; the colony counts failed walks
/// and moves on to the next walker.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The walker spent its whole step budget without arriving.
    #[error("walk gave up after {limit} steps without reaching the goal")]
    StepLimitExceeded { limit: u64 },

    /// Every neighbor of the current cell is blocked or off the grid.
    #[error("no walkable neighbor at {0}")]
    NoOpenNeighbor(Coordinate),
}

pub type WalkResult<T> = Result<T, WalkError>;
