//! Loop removal over a finished walk.

use aco_core::{Coordinate, Route};

/// Strip every loop out of `raw`, keeping its endpoints.
///
/// Walks a cursor along the raw coordinate sequence; before emitting a
/// step it jumps the cursor forward to the *last* visit of the current
/// cell, so any excursion that returns to an earlier cell vanishes. The
/// result visits each coordinate at most once and is never longer than
/// the input.
pub fn simplify(raw: &Route) -> Route {
    let coords: Vec<Coordinate> = raw.coordinates().collect();
    let end = coords[coords.len() - 1];

    let mut simplified = Route::new(raw.start);
    let mut cursor = 0;
    while coords[cursor] != end {
        for later in (cursor + 1..coords.len()).rev() {
            if coords[later] == coords[cursor] {
                cursor = later;
                break;
            }
        }
        simplified.push(raw.steps[cursor]);
        cursor += 1;
    }
    simplified
}
