//! Observer hooks for watching a run without touching the loop.

use aco_core::{Generation, Route};

/// Per-generation results, handed to [`ColonyObserver::on_generation_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GenerationStats {
    pub generation: Generation,

    /// Walkers that reached the end cell this generation.
    pub routes_completed: usize,

    /// Walkers that ran out of steps or got sealed in.
    pub walks_failed: usize,

    /// Length of the shortest simplified route of this generation, if any
    /// walker completed.
    pub shortest_this_generation: Option<usize>,

    /// Length of the best route seen so far across the whole run.
    /// Never increases from one generation to the next.
    pub shortest_overall: Option<usize>,
}

/// Callbacks invoked at generation boundaries during [`Colony::run`].
///
/// All methods have no-op defaults; implement only what you need.
/// Observers run on the driving thread, never inside the walk phase.
///
/// [`Colony::run`]: crate::Colony::run
pub trait ColonyObserver {
    /// Called before a generation's walkers set out.
    fn on_generation_start(&mut self, generation: Generation) {
        let _ = generation;
    }

    /// Called after a generation's field update, with its stats.
    fn on_generation_end(&mut self, generation: Generation, stats: &GenerationStats) {
        let _ = (generation, stats);
    }

    /// Called once after the final generation.  `best` is the shortest
    /// route of the whole run, or `None` if no walker ever finished.
    fn on_run_end(&mut self, best: Option<&Route>) {
        let _ = best;
    }
}

/// An observer that does nothing.  Use when you only want the return value.
pub struct NoopObserver;

impl ColonyObserver for NoopObserver {}
