//! CSV output backend.
//!
//! Creates one file in the configured output directory:
//! - `generation_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{GenerationSummaryRow, OutputResult};

/// Writes generation summaries to a CSV file.
pub struct CsvWriter {
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("generation_summaries.csv"))?;
        summaries.write_record([
            "generation",
            "routes_completed",
            "walks_failed",
            "shortest_this_generation",
            "shortest_overall",
        ])?;

        Ok(Self { summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_generation_summary(&mut self, row: &GenerationSummaryRow) -> OutputResult<()> {
        // Absent lengths become empty cells, not zeros.
        self.summaries.write_record(&[
            row.generation.to_string(),
            row.routes_completed.to_string(),
            row.walks_failed.to_string(),
            row.shortest_this_generation.map(|v| v.to_string()).unwrap_or_default(),
            row.shortest_overall.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        Ok(())
    }
}
