//! Fluent builder for constructing a [`Colony`].

use aco_core::ColonyConfig;
use aco_maze::{Maze, PathSpec, PheromoneField};
use aco_walk::{ScentPolicy, WeightedDraw};

use crate::{Colony, ColonyResult};

/// Fluent builder for [`Colony<P>`].
///
/// # Required inputs
///
/// - [`Maze`] — the grid to search
/// - [`PathSpec`] — start and end cells
/// - [`ColonyConfig`] — walker count, generations, deposit, …
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                        |
/// |--------------|--------------------------------|
/// | `.policy(p)` | [`WeightedDraw`] (proportional) |
///
/// # Example
///
/// ```rust,ignore
/// let maze = load_maze(&maze_path)?;
/// let endpoints = load_path_spec(&path_path)?;
/// let mut colony = ColonyBuilder::new(maze, endpoints, config).build()?;
/// let best = colony.run(&mut NoopObserver);
/// ```
pub struct ColonyBuilder<P: ScentPolicy = WeightedDraw> {
    maze:      Maze,
    endpoints: PathSpec,
    config:    ColonyConfig,
    policy:    P,
}

impl ColonyBuilder<WeightedDraw> {
    /// Create a builder with all required inputs and the production
    /// proportional-draw policy.
    pub fn new(maze: Maze, endpoints: PathSpec, config: ColonyConfig) -> Self {
        Self {
            maze,
            endpoints,
            config,
            policy: WeightedDraw,
        }
    }
}

impl<P: ScentPolicy> ColonyBuilder<P> {
    /// Substitute the direction-draw policy.
    ///
    /// Tests use this to make whole runs deterministic with a fixed policy.
    pub fn policy<Q: ScentPolicy>(self, policy: Q) -> ColonyBuilder<Q> {
        ColonyBuilder {
            maze: self.maze,
            endpoints: self.endpoints,
            config: self.config,
            policy,
        }
    }

    /// Validate the configuration and endpoints and return a ready-to-run
    /// [`Colony`].
    ///
    /// The pheromone field starts at its baseline (every walkable cell at
    /// intensity 1, blocked cells at 0).
    pub fn build(self) -> ColonyResult<Colony<P>> {
        self.config.validate()?;
        self.endpoints.validate(&self.maze)?;

        let field = PheromoneField::new(&self.maze);
        Ok(Colony {
            config: self.config,
            maze: self.maze,
            endpoints: self.endpoints,
            field,
            best: None,
            policy: self.policy,
        })
    }
}
