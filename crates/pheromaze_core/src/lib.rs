//! # Pheromaze Core
//!
//! Ant Colony Optimization over a 2D grid maze.
//!
//! This crate contains the pheromone field and the search loop:
//! - [`Maze`]: wall map plus pheromone field, with sensing, evaporation and deposit
//! - [`Ant`]: one stochastic walk from start to end with dead-end backtracking
//! - [`AntColonyOptimization`]: the generation loop and best-route tracking
//!
//! ## Execution model
//!
//! Ants within a generation only read the maze, so they run on a rayon pool
//! with per-ant `ChaCha8Rng` streams derived from a master seed. The maze is
//! mutated (evaporate, then deposit) only once every ant has returned.
//!
//! ## Example
//!
//! ```
//! use pheromaze_core::{AntColonyOptimization, ColonyConfig, Maze};
//! use pheromaze_data::{Coordinate, PathSpecification};
//!
//! let mut maze = Maze::new(vec![vec![1; 3]; 3], 3, 3).unwrap();
//! let spec = PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(2, 2));
//! let config = ColonyConfig {
//!     ants_per_gen: 10,
//!     generations: 10,
//!     seed: Some(7),
//!     ..ColonyConfig::default()
//! };
//!
//! let mut aco = AntColonyOptimization::new(&mut maze, config).unwrap();
//! let route = aco.find_shortest_route(&spec).unwrap();
//! assert_eq!(route.end(), spec.end());
//! ```

/// Single-ant route construction
pub mod ant;
/// Generation loop, seeding and best-route tracking
pub mod colony;
/// Configuration management for colony parameters
pub mod config;
/// Engine error taxonomy
pub mod error;
/// Wall map and pheromone field
pub mod maze;
/// Run metrics and structured logging
pub mod metrics;

pub use ant::{Ant, Walk};
pub use colony::{ant_seed, AntColonyOptimization, GenerationReport};
pub use config::{AppConfig, ColonyConfig, OutputConfig, RngMode};
pub use error::{AcoError, Result};
pub use maze::Maze;
pub use metrics::{init_logging, Metrics};
