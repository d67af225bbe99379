pub mod coordinate;
pub mod direction;
pub mod pheromone;
pub mod route;
pub mod spec;
