//! `aco-output` — run output for the rust_aco maze pathfinder.
//!
//! Two kinds of artifact:
//!
//! - **Generation summaries**: one row per generation (walkers completed,
//!   walkers failed, shortest lengths), written through the [`OutputWriter`]
//!   trait.  The CSV backend creates `generation_summaries.csv`.
//! - **Route files**: the best route as plain text, one direction token per
//!   line, via [`write_route_file`] / [`read_route_file`].
//!
//! [`ColonyOutputObserver`] bridges `aco_colony::ColonyObserver` to any
//! [`OutputWriter`], so a run streams its summaries as it goes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use aco_output::{ColonyOutputObserver, CsvWriter, write_route_file};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ColonyOutputObserver::new(writer);
//! let best = colony.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! if let Some(best) = &best {
//!     write_route_file(Path::new("./output/route.txt"), best)?;
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod route_file;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ColonyOutputObserver;
pub use route_file::{parse_route_reader, read_route_file, write_route_file};
pub use row::GenerationSummaryRow;
pub use writer::OutputWriter;
