pub use pheromaze_core::{AcoError, AntColonyOptimization, GenerationReport, Maze};
pub use pheromaze_data::{Coordinate, Direction, PathSpecification, Route, SurroundingPheromone};

pub mod ant {
    pub use pheromaze_core::ant::*;
}
pub mod colony {
    pub use pheromaze_core::colony::*;
}
pub mod config {
    pub use pheromaze_core::config::*;
}
pub mod maze {
    pub use pheromaze_core::maze::*;
}
pub mod metrics {
    pub use pheromaze_core::metrics::*;
}
pub mod io {
    pub use pheromaze_io::*;
}
