//! Plain value types shared by the pheromaze engine and its I/O layer.

pub mod data;

pub use data::coordinate::Coordinate;
pub use data::direction::Direction;
pub use data::pheromone::SurroundingPheromone;
pub use data::route::{Route, RouteError};
pub use data::spec::PathSpecification;
