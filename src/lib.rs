//! # Pheromaze
//!
//! Finds short routes through grid mazes with Ant Colony Optimization.
//!
//! The engine lives in `pheromaze_core`; this crate wires the file loaders,
//! the colony and the route writer together behind [`app::App`].

pub mod app;
pub mod model;
