//! Stochastic route construction for a single ant.
//!
//! The walk is a randomised depth-first search: the ant moves to an unvisited
//! neighbour with probability proportional to its pheromone, and when every
//! neighbour is visited or empty it pops its last move and steps back. It
//! only reads the maze.

use crate::error::{AcoError, Result};
use crate::maze::Maze;
use pheromaze_data::{Coordinate, Direction, PathSpecification, Route, SurroundingPheromone};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashSet;

/// A completed walk and how much work it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub route: Route,
    /// Loop iterations, forward moves and backtracks combined.
    pub steps: usize,
    pub backtracks: usize,
}

pub struct Ant<'m, R: Rng> {
    maze: &'m Maze,
    end: Coordinate,
    current_position: Coordinate,
    visited: HashSet<Coordinate>,
    route: Route,
    rng: R,
    step_budget: usize,
}

impl<'m, R: Rng> Ant<'m, R> {
    /// The default step budget is `2 * width * length`, which a walk that
    /// never re-enters a visited cell cannot exceed.
    pub fn new(maze: &'m Maze, spec: &PathSpecification, rng: R) -> Self {
        let start = spec.start();
        Self {
            maze,
            end: spec.end(),
            current_position: start,
            visited: HashSet::from([start]),
            route: Route::new(start),
            rng,
            step_budget: 2 * maze.cell_count(),
        }
    }

    #[must_use]
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    /// Walks from start to end and returns the route taken.
    pub fn find_route(self) -> Result<Route> {
        self.walk().map(|walk| walk.route)
    }

    /// Walks from start to end.
    ///
    /// Fails with [`AcoError::NoFeasibleRoute`] when the ant backs out past
    /// its start, and with [`AcoError::StepBudgetExhausted`] when the budget
    /// runs out first.
    pub fn walk(mut self) -> Result<Walk> {
        let mut steps = 0;
        let mut backtracks = 0;

        while self.current_position != self.end {
            if steps >= self.step_budget {
                return Err(AcoError::StepBudgetExhausted {
                    budget: self.step_budget,
                });
            }
            steps += 1;

            let surrounding = self
                .maze
                .get_surrounding_pheromone(&self.current_position)
                .ok_or(AcoError::OutOfBounds(self.current_position))?;
            let weights = self.unvisited_weights(&surrounding);
            let total: f64 = weights.iter().sum();

            if total <= 0.0 {
                self.backtrack()?;
                backtracks += 1;
                continue;
            }

            let direction = self.choose(weights, total)?;
            self.advance(direction);
        }

        Ok(Walk {
            route: self.route,
            steps,
            backtracks,
        })
    }

    fn unvisited_weights(&self, surrounding: &SurroundingPheromone) -> [f64; 4] {
        let mut weights = surrounding.to_array();
        for d in Direction::ALL {
            if self.visited.contains(&self.current_position.add_direction(d)) {
                weights[d.index()] = 0.0;
            }
        }
        weights
    }

    fn choose(&mut self, weights: [f64; 4], total: f64) -> Result<Direction> {
        let probabilities = weights.map(|w| w / total);
        let dist =
            WeightedIndex::new(probabilities).map_err(|e| AcoError::DegenerateWeights {
                position: self.current_position,
                reason: e.to_string(),
            })?;
        Ok(Direction::ALL[dist.sample(&mut self.rng)])
    }

    fn advance(&mut self, direction: Direction) {
        self.current_position = self.current_position.add_direction(direction);
        self.visited.insert(self.current_position);
        self.route.add(direction);
    }

    /// Undoes the last move. The visited set is left as is so the dead end
    /// is not explored again.
    fn backtrack(&mut self) -> Result<()> {
        let last = self.route.remove_last()?;
        tracing::trace!(from = %self.current_position, undo = %last, "Backtracking");
        self.current_position = self.current_position.subtract_direction(last);
        Ok(())
    }
}
