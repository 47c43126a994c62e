use aco_core::AcoError;
use aco_maze::MazeError;
use thiserror::Error;

/// Ways building a colony can fail.
///
/// Everything fallible happens in [`ColonyBuilder::build`][crate::ColonyBuilder::build];
/// once a colony exists, a run always completes (failed walks are counted,
/// not raised).
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("colony configuration: {0}")]
    Config(#[from] AcoError),

    #[error("path endpoints: {0}")]
    Endpoints(#[from] MazeError),
}

pub type ColonyResult<T> = Result<T, ColonyError>;
