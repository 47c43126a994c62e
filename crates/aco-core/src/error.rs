//! Base error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `AcoError` via `From` impls or keep them separate and wrap `AcoError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `aco-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AcoError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `aco-*` crates.
pub type AcoResult<T> = Result<T, AcoError>;
