//! The `Colony` struct and its generation loop.

use aco_core::{ColonyConfig, Generation, Route, WalkerId, WalkerRng};
use aco_maze::{Maze, PathSpec, PheromoneField};
use aco_walk::{ScentPolicy, WalkResult, Walker, WeightedDraw, simplify};

use crate::{ColonyObserver, GenerationStats};

/// The colony runner.
///
/// `Colony<P>` holds the maze, the pheromone field, and the run
/// configuration, and drives the three-phase generation loop:
///
/// 1. **Walk phase** (optionally parallel with the `parallel` feature):
///    every walker traverses the maze against a frozen field snapshot.
/// 2. **Collect phase** (sequential, ascending walker order for
///    determinism): simplify each completed route and keep the first
///    strictly-shortest one seen as the running best.
/// 3. **Field update**: evaporate once, then reinforce with every route
///    completed this generation.
///
/// Create via [`ColonyBuilder`][crate::ColonyBuilder].
pub struct Colony<P: ScentPolicy = WeightedDraw> {
    /// Global configuration (walkers per generation, deposit, seed, …).
    pub config: ColonyConfig,

    /// The maze.  Immutable for the lifetime of the colony.
    pub maze: Maze,

    /// Start and end cells, validated against the maze at build time.
    pub endpoints: PathSpec,

    /// The shared pheromone field.  Frozen while a generation walks,
    /// updated between generations, reset at the start of every run.
    pub field: PheromoneField,

    /// Shortest simplified route seen so far, across all generations of
    /// the current run.
    pub best: Option<Route>,

    /// Direction-draw policy, shared by every walker.
    pub policy: P,
}

impl<P: ScentPolicy> Colony<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run all configured generations and return the best route found.
    ///
    /// The field and the running best are reset first, so repeated calls
    /// on one colony are independent runs.  Calls observer hooks at every
    /// generation boundary; use [`NoopObserver`][crate::NoopObserver] if
    /// you don't need callbacks.  Returns `None` only when no walker of
    /// any generation reached the end cell.
    pub fn run<O: ColonyObserver>(&mut self, observer: &mut O) -> Option<Route> {
        self.field.reset(&self.maze);
        self.best = None;

        for number in 0..self.config.generations {
            let generation = Generation(number);
            observer.on_generation_start(generation);
            let stats = self.run_generation(generation);
            observer.on_generation_end(generation, &stats);
        }

        observer.on_run_end(self.best.as_ref());
        self.best.clone()
    }

    // ── Generation processing ─────────────────────────────────────────────

    fn run_generation(&mut self, generation: Generation) -> GenerationStats {
        // ── Phase 1: walk against the frozen field ────────────────────────
        let outcomes = self.walk_phase(generation);

        // ── Phase 2: collect simplified routes, track the best ────────────
        //
        // Outcomes arrive in ascending walker order.  The running best is
        // replaced only on strict improvement, so among equally short
        // routes the earliest walker's survives, independent of how the
        // walk phase was scheduled.
        let mut routes = Vec::with_capacity(outcomes.len());
        let mut walks_failed = 0;
        let mut shortest_this_generation: Option<usize> = None;

        for outcome in outcomes {
            let raw = match outcome {
                Ok(raw) => raw,
                Err(_) => {
                    // Failed walks leave no trail; they only show up in
                    // the stats.
                    walks_failed += 1;
                    continue;
                }
            };
            let route = simplify(&raw);
            if shortest_this_generation.is_none_or(|len| route.len() < len) {
                shortest_this_generation = Some(route.len());
            }
            if self.best.as_ref().is_none_or(|best| route.len() < best.len()) {
                self.best = Some(route.clone());
            }
            routes.push(route);
        }

        // ── Phase 3: field update ─────────────────────────────────────────
        //
        // One evaporation per generation, then every completed route
        // deposits its reward.  Short routes concentrate the same deposit
        // over fewer cells.
        self.field.evaporate(self.config.evaporation_rate);
        for route in &routes {
            self.field.reinforce(route, self.config.deposit_total);
        }

        GenerationStats {
            generation,
            routes_completed: routes.len(),
            walks_failed,
            shortest_this_generation,
            shortest_overall: self.best.as_ref().map(Route::len),
        }
    }

    /// Walk every slot of one generation and return the outcomes in slot
    /// order.
    ///
    /// Each walker draws from its own [`WalkerRng`] stream keyed by a
    /// run-unique id, so the routes do not depend on which thread ran
    /// which walker.
    fn walk_phase(&self, generation: Generation) -> Vec<WalkResult<Route>> {
        // Explicit borrows so the closure captures disjoint pieces of
        // `self`, not `self` itself.
        let maze = &self.maze;
        let field = &self.field;
        let policy = &self.policy;
        let endpoints = self.endpoints;
        let step_limit = self.config.step_limit;
        let seed = self.config.seed;
        let walkers = self.config.walkers_per_generation;
        let first_id = generation.0 as u64 * walkers as u64;

        let walk_one = move |slot: usize| {
            let id = WalkerId(first_id + slot as u64);
            let mut rng = WalkerRng::new(seed, id);
            Walker::new(maze, field, endpoints.start, endpoints.end, step_limit)
                .traverse(&mut rng, policy)
        };

        #[cfg(not(feature = "parallel"))]
        {
            (0..walkers).map(walk_one).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..walkers).into_par_iter().map(walk_one).collect()
        }
    }
}
