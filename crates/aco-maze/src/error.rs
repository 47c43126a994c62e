use aco_core::Coordinate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze dimensions: {0}")]
    Dimensions(String),

    #[error("maze parse error: {0}")]
    Parse(String),

    #[error("{which} cell {at} lies outside the {width}x{length} maze")]
    EndpointOutOfBounds {
        which:  &'static str,
        at:     Coordinate,
        width:  usize,
        length: usize,
    },

    #[error("{which} cell {at} is blocked")]
    EndpointBlocked {
        which: &'static str,
        at:    Coordinate,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MazeResult<T> = Result<T, MazeError>;
