//! The `OutputWriter` trait implemented by backend writers.

use crate::{GenerationSummaryRow, OutputResult};

/// Trait implemented by summary writers (currently CSV).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`ColonyOutputObserver::take_error`][crate::ColonyOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one generation summary row.
    fn write_generation_summary(&mut self, row: &GenerationSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
