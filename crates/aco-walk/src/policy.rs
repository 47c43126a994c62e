//! Direction selection.
//!
//! The walker reduces each step to four non-negative weights, one per
//! direction, and hands them to a [`ScentPolicy`] for the actual draw.
//! Production runs use [`WeightedDraw`]; tests substitute fixed policies
//! to make walks fully deterministic.

use aco_core::{Direction, WalkerRng};

/// Draw weights indexed by [`Direction::index`].
pub type DirectionWeights = [f64; 4];

/// Picks the next step of a walk from a set of direction weights.
///
/// Implementations must be `Send + Sync`; a single policy value is shared
/// by every walker of a generation, including parallel ones.
pub trait ScentPolicy: Send + Sync {
    /// Choose a direction given non-negative weights.
    ///
    /// Returns `None` when every weight is zero. A direction whose weight
    /// is zero is never returned.
    fn choose(&self, weights: &DirectionWeights, rng: &mut WalkerRng) -> Option<Direction>;
}

/// The production policy: a proportional (roulette-wheel) draw.
///
/// Each direction is chosen with probability `weight / total`.
pub struct WeightedDraw;

impl ScentPolicy for WeightedDraw {
    fn choose(&self, weights: &DirectionWeights, rng: &mut WalkerRng) -> Option<Direction> {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }
        let mut remaining = rng.gen_range(0.0..total);
        let mut last_positive = None;
        for dir in Direction::ALL {
            let weight = weights[dir.index()];
            if weight <= 0.0 {
                continue;
            }
            if remaining < weight {
                return Some(dir);
            }
            remaining -= weight;
            last_positive = Some(dir);
        }
        // Rounding in the subtractions above can leave a sliver of
        // `remaining` after the final positive weight; it belongs to
        // that weight's direction.
        last_positive
    }
}
