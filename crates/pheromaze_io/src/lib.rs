//! # Pheromaze IO
//!
//! Loaders and writers around the search engine.
//!
//! This crate provides:
//! - Structured error handling with a custom error type
//! - The maze text format loader
//! - The start/end coordinate file loader
//! - Route export in the plain text format and as JSON
//! - JSON run reports

/// Start/end coordinate file loader
pub mod coordinates;
/// Error types and result aliases for I/O operations
pub mod error;
/// Maze text format loader and writer
pub mod maze_file;
/// Run summaries persisted next to the route
pub mod report;
/// Route export and import
pub mod route_file;
/// JSON helpers with validation
pub mod serialization;

pub use coordinates::{parse_coordinates, read_coordinates};
pub use error::{IoError, Result};
pub use maze_file::{parse_maze, read_maze, write_maze};
pub use report::RunReport;
pub use route_file::{format_route, parse_route, read_route, write_route, write_route_json};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
