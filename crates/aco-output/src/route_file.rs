//! Plain-text route files.
//!
//! A route file holds the steps of one route as lowercase direction tokens,
//! one per line:
//!
//! ```text
//! east
//! east
//! south
//! ```
//!
//! The start cell is not stored; it comes from the path spec the run was
//! given, so the reader takes it as a parameter.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use aco_core::{Coordinate, Route};

use crate::{OutputError, OutputResult};

/// Write the steps of `route`, one direction token per line.
pub fn write_route_file(path: &Path, route: &Route) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for step in &route.steps {
        writeln!(out, "{step}")?;
    }
    out.flush()?;
    Ok(())
}

/// Read a route file, rebuilding the route from `start`.
pub fn read_route_file(path: &Path, start: Coordinate) -> OutputResult<Route> {
    let file = File::open(path)?;
    parse_route_reader(file, start)
}

/// Parse route tokens from any reader.  Whitespace between tokens is free
/// form, so one-per-line and space-separated files both parse.
pub fn parse_route_reader<R: Read>(mut reader: R, start: Coordinate) -> OutputResult<Route> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut route = Route::new(start);
    for token in text.split_whitespace() {
        match token.parse() {
            Ok(dir) => route.push(dir),
            Err(_) => return Err(OutputError::BadToken(token.to_owned())),
        }
    }
    Ok(route)
}
