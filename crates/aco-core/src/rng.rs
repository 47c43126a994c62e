//! Deterministic per-walker RNG.
//!
//! # Determinism strategy
//!
//! Each walker gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (walker_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive walker ids uniformly across the seed space.
//! This means:
//!
//! - Walkers never share RNG state (no contention, no ordering dependency),
//!   so a generation produces identical routes whether the walker phase runs
//!   sequentially or on a thread pool.
//! - Changing the walker count only adds or removes streams at the end; the
//!   streams of existing walkers are undisturbed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WalkerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-walker deterministic RNG.
///
/// Create one per walker at the start of its walk; every draw method takes
/// `&mut self`, so a walker owns its stream outright.
pub struct WalkerRng(SmallRng);

impl WalkerRng {
    /// Seed deterministically from the run's global seed and a walker id.
    pub fn new(global_seed: u64, walker: WalkerId) -> Self {
        let seed = global_seed ^ walker.0.wrapping_mul(MIXING_CONSTANT);
        WalkerRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
