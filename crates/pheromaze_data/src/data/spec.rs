use crate::data::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// The start and end cell a route has to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpecification {
    start: Coordinate,
    end: Coordinate,
}

impl PathSpecification {
    #[must_use]
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Coordinate {
        self.end
    }
}
