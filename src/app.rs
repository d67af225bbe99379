use anyhow::{Context, Result};
use std::path::Path;

use crate::model::config::AppConfig;
use crate::model::io::{read_coordinates, read_maze, write_route, RunReport};
use crate::model::{AntColonyOptimization, Maze, PathSpecification};

/// Loads a maze, runs the colony on it and writes the results.
pub struct App {
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        Ok(Self { config })
    }

    /// Runs the colony on an already loaded maze. The maze keeps the final
    /// pheromone field.
    pub fn solve(&self, maze: &mut Maze, spec: &PathSpecification) -> Result<RunReport> {
        let mut aco = AntColonyOptimization::new(maze, self.config.colony.clone())?;
        let route = aco.find_shortest_route(spec)?;
        Ok(RunReport::from_colony(&aco, &route, self.config.fingerprint()))
    }

    /// Full pipeline: load inputs, solve, write the route and optional report.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(&self, maze_path: P, coordinates_path: Q) -> Result<RunReport> {
        let mut maze = read_maze(maze_path)?;
        let spec = read_coordinates(coordinates_path)?;
        tracing::info!(
            start = %spec.start(),
            end = %spec.end(),
            fingerprint = %self.config.fingerprint(),
            "Solving maze"
        );

        let report = self.solve(&mut maze, &spec)?;

        write_route(&report.route, &self.config.output.route_path)?;
        if let Some(path) = &self.config.output.report_path {
            report.write(path)?;
        }
        Ok(report)
    }
}
