//! The step loop of a single walker.
//!
//! A [`Walker`] borrows the maze and a pheromone snapshot, both immutable,
//! and wanders from its start cell until it stands on the goal or gives up.
//! Each step it reads the scent of the four neighboring cells and lets a
//! [`ScentPolicy`] draw the next direction from those weights, with two
//! adjustments:
//!
//! * the direction it just came from is suppressed, so the walker keeps
//!   moving instead of dithering in place,
//! * unless every other reading is zero, which marks a dead end; then the
//!   backward direction stays live so the walker can retreat.
//!
//! When every weight ends up zero (a fully evaporated field, or a dead end
//! with no scent behind either) the walker falls back to a uniform draw
//! over the walkable neighbors.

use aco_core::{Coordinate, Direction, Route, WalkerRng};
use aco_maze::{Maze, PheromoneField};

use crate::error::{WalkError, WalkResult};
use crate::policy::{DirectionWeights, ScentPolicy};

/// One traversal attempt over a frozen maze and pheromone field.
pub struct Walker<'a> {
    maze:       &'a Maze,
    field:      &'a PheromoneField,
    goal:       Coordinate,
    at:         Coordinate,
    came_by:    Option<Direction>,
    route:      Route,
    step_limit: Option<u64>,
}

impl<'a> Walker<'a> {
    /// A fresh walker standing on `start`, aiming for `goal`.
    ///
    /// `step_limit` caps the number of steps taken before the walk is
    /// abandoned with [`WalkError::StepLimitExceeded`]; `None` lets the
    /// walker wander until it arrives or gets sealed in.
    pub fn new(
        maze: &'a Maze,
        field: &'a PheromoneField,
        start: Coordinate,
        goal: Coordinate,
        step_limit: Option<u64>,
    ) -> Self {
        Walker {
            maze,
            field,
            goal,
            at: start,
            came_by: None,
            route: Route::new(start),
            step_limit,
        }
    }

    /// Walk until the goal is reached, consuming the walker.
    ///
    /// Returns the raw route, loops and all; feed it to
    /// [`crate::simplify`] before comparing lengths or rewarding it.
    pub fn traverse(
        mut self,
        rng: &mut WalkerRng,
        policy: &impl ScentPolicy,
    ) -> WalkResult<Route> {
        while self.at != self.goal {
            if let Some(limit) = self.step_limit {
                if self.route.len() as u64 >= limit {
                    return Err(WalkError::StepLimitExceeded { limit });
                }
            }
            let dir = self.choose_step(rng, policy)?;
            self.route.push(dir);
            self.at = self.at + dir;
            self.came_by = Some(dir);
        }
        Ok(self.route)
    }

    fn choose_step(
        &self,
        rng: &mut WalkerRng,
        policy: &impl ScentPolicy,
    ) -> WalkResult<Direction> {
        let scent = self.field.surrounding_scent(self.at);

        let mut weights: DirectionWeights = [0.0; 4];
        for dir in Direction::ALL {
            weights[dir.index()] = scent.get(dir);
        }

        if let Some(came_by) = self.came_by {
            let back = came_by.opposite();
            // Readings are non-negative, so a zero sum means every onward
            // reading is zero: the cell is a dead end and the only way out
            // is back the way we came.
            let onward: f64 = Direction::ALL
                .into_iter()
                .filter(|&dir| dir != back)
                .map(|dir| scent.get(dir))
                .sum();
            if onward != 0.0 {
                weights[back.index()] = 0.0;
            }
        }

        match policy.choose(&weights, rng) {
            Some(dir) => Ok(dir),
            None => self.fallback_step(rng),
        }
    }

    /// Uniform draw over the walkable neighbors, backward move included.
    ///
    /// Reached only when every weight is zero, i.e. on a fully evaporated
    /// field or in a scentless dead end.
    fn fallback_step(&self, rng: &mut WalkerRng) -> WalkResult<Direction> {
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| self.maze.is_walkable(self.at + dir))
            .collect();
        match rng.choose(&open) {
            Some(&dir) => Ok(dir),
            None => Err(WalkError::NoOpenNeighbor(self.at)),
        }
    }
}
