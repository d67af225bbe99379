use crate::data::direction::Direction;
use serde::{Deserialize, Serialize};

/// Snapshot of the pheromone on the four cells around a position.
///
/// A neighbour outside the maze reads as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurroundingPheromone {
    east: f64,
    north: f64,
    west: f64,
    south: f64,
}

impl SurroundingPheromone {
    #[must_use]
    pub const fn new(east: f64, north: f64, west: f64, south: f64) -> Self {
        Self {
            east,
            north,
            west,
            south,
        }
    }

    /// Builds a snapshot from readings laid out in [`Direction::ALL`] order.
    #[must_use]
    pub const fn from_array(readings: [f64; 4]) -> Self {
        Self::new(readings[0], readings[1], readings[2], readings[3])
    }

    #[must_use]
    pub const fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::West => self.west,
            Direction::South => self.south,
        }
    }

    /// Readings in [`Direction::ALL`] order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.east, self.north, self.west, self.south]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.to_array().iter().sum()
    }
}
