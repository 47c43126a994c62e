//! `ColonyOutputObserver<W>` — bridges `ColonyObserver` to an `OutputWriter`.

use aco_colony::{ColonyObserver, GenerationStats};
use aco_core::{Generation, Route};

use crate::row::GenerationSummaryRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`ColonyObserver`] that writes one summary row per generation to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ColonyObserver`
/// methods have no return value.  After `colony.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ColonyOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ColonyOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `colony.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ColonyObserver for ColonyOutputObserver<W> {
    fn on_generation_end(&mut self, _generation: Generation, stats: &GenerationStats) {
        let row = GenerationSummaryRow {
            generation:       stats.generation.0,
            routes_completed: stats.routes_completed as u64,
            walks_failed:     stats.walks_failed as u64,
            shortest_this_generation: stats.shortest_this_generation.map(|len| len as u64),
            shortest_overall: stats.shortest_overall.map(|len| len as u64),
        };
        let result = self.writer.write_generation_summary(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _best: Option<&Route>) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
