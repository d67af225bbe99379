//! Generation loop for the colony.
//!
//! Each generation spawns `ants_per_gen` ants against a shared read-only view
//! of the maze, waits for all of them, updates the best route, then
//! evaporates and deposits pheromone. The maze is only borrowed mutably after
//! every ant has returned.

use crate::ant::{Ant, Walk};
use crate::config::{ColonyConfig, RngMode};
use crate::error::{AcoError, Result};
use crate::maze::Maze;
use crate::metrics::Metrics;
use pheromaze_data::{PathSpecification, Route};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const SEED_MIX: u64 = 0x517C_C1B7_2722_0A95;

/// Seed for one ant's random stream.
///
/// Depends only on its inputs, so a generation produces the same routes no
/// matter how ants are scheduled across threads.
#[must_use]
pub fn ant_seed(master_seed: u64, generation: usize, ant: usize) -> u64 {
    let mut seed = master_seed.wrapping_mul(SEED_MIX) ^ generation as u64;
    seed = seed.wrapping_mul(SEED_MIX) ^ ant as u64;
    seed = seed.wrapping_mul(SEED_MIX);
    seed ^ (seed >> 32)
}

/// Summary of one finished generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub successful_ants: usize,
    pub failed_ants: usize,
    pub backtracks: usize,
    /// Shortest route found by this generation's ants.
    pub generation_best: usize,
    /// Shortest route found so far, including this generation.
    pub best_so_far: usize,
    /// Pheromone mass after evaporation and deposit.
    pub total_pheromone: f64,
}

pub struct AntColonyOptimization<'m> {
    maze: &'m mut Maze,
    config: ColonyConfig,
    master_seed: u64,
    shared_rng: ChaCha8Rng,
    /// Endpoints `best` was found for.
    solving: Option<PathSpecification>,
    best: Option<Route>,
    history: Vec<GenerationReport>,
    metrics: Metrics,
}

impl<'m> AntColonyOptimization<'m> {
    /// Validates `config` and resolves the master seed, drawing one from
    /// entropy when none is configured.
    pub fn new(maze: &'m mut Maze, config: ColonyConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AcoError::InvalidConfig(e.to_string()))?;

        let master_seed = config.seed.unwrap_or_else(rand::random);
        if config.seed.is_none() {
            tracing::info!(seed = master_seed, "No seed configured, drew one from entropy");
        }

        Ok(Self {
            maze,
            shared_rng: ChaCha8Rng::seed_from_u64(master_seed),
            config,
            master_seed,
            solving: None,
            best: None,
            history: Vec::new(),
            metrics: Metrics::new(),
        })
    }

    #[must_use]
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    #[must_use]
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        self.maze
    }

    /// Best route found across every generation run so far.
    #[must_use]
    pub fn best(&self) -> Option<&Route> {
        self.best.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[GenerationReport] {
        &self.history
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Runs `generations` generations and returns the shortest route seen.
    ///
    /// Calling this again with the same endpoints continues from the current
    /// pheromone field and best route. New endpoints start a fresh best.
    ///
    /// If every ant of a generation fails after a route has been found, the
    /// run stops early and returns that route. This happens once the end
    /// cell's pheromone has evaporated to zero.
    pub fn find_shortest_route(&mut self, spec: &PathSpecification) -> Result<Route> {
        self.check_endpoints(spec)?;
        tracing::info!(
            start = %spec.start(),
            end = %spec.end(),
            ants_per_gen = self.config.ants_per_gen,
            generations = self.config.generations,
            seed = self.master_seed,
            "Starting colony"
        );

        for _ in 0..self.config.generations {
            match self.run_generation(spec).map(|_| ()) {
                Ok(()) => {}
                Err(AcoError::AllAntsFailed { generation, ants }) if self.best.is_some() => {
                    tracing::warn!(
                        generation,
                        ants,
                        "Every ant failed, stopping early with the best route so far"
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let best = self
            .best
            .clone()
            .ok_or_else(|| AcoError::InvalidConfig("no generation produced a route".into()))?;
        tracing::info!(
            size = best.size(),
            ants_failed = self.metrics.ants_failed(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Colony finished"
        );
        Ok(best)
    }

    fn check_endpoints(&self, spec: &PathSpecification) -> Result<()> {
        for endpoint in [spec.start(), spec.end()] {
            if !self.maze.in_bounds(&endpoint) {
                return Err(AcoError::OutOfBounds(endpoint));
            }
            if !self.maze.is_accessible(&endpoint) {
                return Err(AcoError::InaccessibleEndpoint(endpoint));
            }
        }
        Ok(())
    }

    /// Runs a single generation: walk, update best, evaporate, deposit.
    ///
    /// Ants whose walk fails are left out of the best update and the
    /// deposit. If every ant fails the generation is an error and the maze
    /// is left untouched.
    pub fn run_generation(&mut self, spec: &PathSpecification) -> Result<&GenerationReport> {
        self.bind_endpoints(spec);
        let started = Instant::now();
        let generation = self.history.len();

        let outcomes = self.spawn_ants(generation, spec);

        let mut routes = Vec::with_capacity(outcomes.len());
        let mut failed_ants = 0;
        let mut backtracks = 0;
        for (ant, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(walk) => {
                    self.metrics.record_walk(walk.steps, walk.backtracks);
                    backtracks += walk.backtracks;
                    routes.push(walk.route);
                }
                Err(e) if e.is_walk_failure() => {
                    tracing::debug!(generation, ant, error = %e, "Ant failed");
                    self.metrics.record_failure();
                    failed_ants += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if routes.is_empty() {
            return Err(AcoError::AllAntsFailed {
                generation,
                ants: failed_ants,
            });
        }

        let generation_best = self.update_best(&routes, generation);

        self.maze.evaporate(self.config.evaporation)?;
        self.maze.add_pheromone_routes(&routes, self.config.q)?;
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(generation, "Pheromone field\n{}", self.maze.pheromone_table());
        }

        let best_so_far = self.best.as_ref().map_or(generation_best, Route::size);
        self.metrics
            .record_generation(Some(best_so_far), started.elapsed());

        let report = GenerationReport {
            generation,
            successful_ants: routes.len(),
            failed_ants,
            backtracks,
            generation_best,
            best_so_far,
            total_pheromone: self.maze.total_pheromone(),
        };
        tracing::debug!(
            generation,
            generation_best,
            best_so_far,
            failed_ants,
            total_pheromone = report.total_pheromone,
            "Generation complete"
        );
        self.history.push(report);
        Ok(&self.history[generation])
    }

    fn bind_endpoints(&mut self, spec: &PathSpecification) {
        if self.solving.as_ref() != Some(spec) {
            if self.best.is_some() {
                tracing::debug!(
                    start = %spec.start(),
                    end = %spec.end(),
                    "New endpoints, dropping best route"
                );
            }
            self.solving = Some(*spec);
            self.best = None;
            self.metrics.reset_best();
        }
    }

    fn spawn_ants(&mut self, generation: usize, spec: &PathSpecification) -> Vec<Result<Walk>> {
        let maze: &Maze = self.maze;
        let ants = self.config.ants_per_gen;
        let budget = self
            .config
            .step_budget
            .unwrap_or(2 * maze.cell_count());
        let master_seed = self.master_seed;
        let walk_seeded = |ant: usize| {
            let rng = ChaCha8Rng::seed_from_u64(ant_seed(master_seed, generation, ant));
            Ant::new(maze, spec, rng).with_step_budget(budget).walk()
        };

        match self.config.rng_mode {
            RngMode::Shared => {
                let rng = &mut self.shared_rng;
                (0..ants)
                    .map(|_| Ant::new(maze, spec, &mut *rng).with_step_budget(budget).walk())
                    .collect()
            }
            RngMode::PerAnt if self.config.runs_parallel() => {
                (0..ants).into_par_iter().map(walk_seeded).collect()
            }
            RngMode::PerAnt => (0..ants).map(walk_seeded).collect(),
        }
    }

    /// Replaces the best route with any strictly shorter one, in ant order.
    /// Returns the shortest size in `routes`.
    fn update_best(&mut self, routes: &[Route], generation: usize) -> usize {
        let mut generation_best = usize::MAX;
        for route in routes {
            generation_best = generation_best.min(route.size());
            let improves = self
                .best
                .as_ref()
                .map_or(true, |best| route.is_shorter_than(best));
            if improves {
                tracing::info!(generation, size = route.size(), "New best route");
                self.best = Some(route.clone());
            }
        }
        generation_best
    }
}
