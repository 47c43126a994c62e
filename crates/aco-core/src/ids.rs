//! Strongly typed identifier wrappers.
//!
//! The inner integer is `pub` for direct arithmetic (walker ids seed RNGs,
//! generation numbers index output rows), but callers should prefer the
//! `.index()` helpers where a `usize` is wanted.

use std::fmt;

/// Identifies one walker within a run.
///
/// Walker ids are unique across the whole run, not just within a generation:
/// `id = generation * walkers_per_generation + slot`.  Each id seeds an
/// independent RNG stream, so results do not depend on scheduling order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerId(pub u64);

impl WalkerId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// A zero-based generation counter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u32);

impl Generation {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}
