use crate::data::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid position. Carries no notion of validity; bounds belong to the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn add_direction(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub const fn subtract_direction(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x - dx, self.y - dy)
    }

    /// Half-open range check `low <= x < high`.
    #[inline]
    #[must_use]
    pub fn x_between(&self, low: i32, high: i32) -> bool {
        (low..high).contains(&self.x)
    }

    /// Half-open range check `low <= y < high`.
    #[inline]
    #[must_use]
    pub fn y_between(&self, low: i32, high: i32) -> bool {
        (low..high).contains(&self.y)
    }

    #[must_use]
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
