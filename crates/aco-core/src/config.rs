//! Colony run configuration.

use crate::{AcoError, AcoResult};

/// Top-level run parameters.
///
/// Typically filled in by the application and handed to the colony builder,
/// which calls [`validate`][Self::validate] before accepting it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Walkers released per generation.  Must be at least 1.
    pub walkers_per_generation: usize,

    /// Number of generations to run.  Must be at least 1.
    pub generations: u32,

    /// Total deposit Q spread along each finished route: every cell the
    /// route enters receives `Q / route_len`, so shorter routes deposit more
    /// per cell.  Must be positive and finite.
    pub deposit_total: f64,

    /// Evaporation rate ρ applied once per generation: every cell keeps a
    /// `1 - ρ` fraction of its intensity.  Must lie in `[0, 1)` — at exactly
    /// 1 the field would zero out each generation and the walk would never
    /// see a gradient.
    pub evaporation_rate: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Per-walker step budget.  A walker that exceeds it gives up (counted
    /// as a failed walk).  `None` leaves walks unbounded, which on a maze
    /// where the goal is unreachable means the walk never terminates — set
    /// a budget whenever connectivity is not known in advance.
    pub step_limit: Option<u64>,
}

impl ColonyConfig {
    /// Check every numeric invariant, reporting the first violation.
    pub fn validate(&self) -> AcoResult<()> {
        if self.walkers_per_generation == 0 {
            return Err(AcoError::Config(
                "walkers_per_generation must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(AcoError::Config("generations must be at least 1".into()));
        }
        if !self.deposit_total.is_finite() || self.deposit_total <= 0.0 {
            return Err(AcoError::Config(format!(
                "deposit_total must be positive and finite, got {}",
                self.deposit_total
            )));
        }
        if !self.evaporation_rate.is_finite()
            || !(0.0..1.0).contains(&self.evaporation_rate)
        {
            return Err(AcoError::Config(format!(
                "evaporation_rate must lie in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        Ok(())
    }
}
