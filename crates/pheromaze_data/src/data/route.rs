use crate::data::coordinate::Coordinate;
use crate::data::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// Backtracking past the start of the route.
    #[error("cannot remove a step from an empty route starting at {start}")]
    Empty { start: Coordinate },
}

/// Sequence of moves taken from a fixed start coordinate.
///
/// Behaves as a stack: ants push a direction for every forward move and pop
/// it again when they back out of a dead end. Replaying `directions` from
/// `start` always lands on the ant's current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    start: Coordinate,
    directions: Vec<Direction>,
}

impl Route {
    #[must_use]
    pub fn new(start: Coordinate) -> Self {
        Self {
            start,
            directions: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_directions(start: Coordinate, directions: Vec<Direction>) -> Self {
        Self { start, directions }
    }

    pub fn add(&mut self, direction: Direction) {
        self.directions.push(direction);
    }

    /// Pops the most recent step.
    pub fn remove_last(&mut self) -> Result<Direction, RouteError> {
        self.directions
            .pop()
            .ok_or(RouteError::Empty { start: self.start })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.directions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Position reached after replaying every step.
    #[must_use]
    pub fn end(&self) -> Coordinate {
        self.directions
            .iter()
            .fold(self.start, |c, d| c.add_direction(*d))
    }

    /// The cell occupied immediately before each step, in order.
    ///
    /// Yields `size()` coordinates; the final cell of the route is not included.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.directions.iter().scan(self.start, |position, d| {
            let before = *position;
            *position = position.add_direction(*d);
            Some(before)
        })
    }

    #[must_use]
    pub fn is_shorter_than(&self, other: &Route) -> bool {
        self.size() < other.size()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.start)?;
        for (i, d) in self.directions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remove_last_on_empty_route_fails() {
        let mut route = Route::new(Coordinate::new(1, 1));
        assert_eq!(
            route.remove_last(),
            Err(RouteError::Empty {
                start: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn test_add_and_backtrack() {
        let mut route = Route::new(Coordinate::new(0, 0));
        route.add(Direction::East);
        route.add(Direction::North);
        assert_eq!(route.size(), 2);
        assert_eq!(route.end(), Coordinate::new(1, 1));

        assert_eq!(route.remove_last(), Ok(Direction::North));
        assert_eq!(route.size(), 1);
        assert_eq!(route.end(), Coordinate::new(1, 0));
    }

    #[test]
    fn test_coordinates_exclude_final_cell() {
        let route = Route::from_directions(
            Coordinate::new(0, 0),
            vec![Direction::East, Direction::East, Direction::North],
        );
        let visited: Vec<_> = route.coordinates().collect();
        assert_eq!(
            visited,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0)
            ]
        );
        assert_eq!(route.end(), Coordinate::new(2, 1));
    }

    #[test]
    fn test_display() {
        let route = Route::from_directions(Coordinate::new(0, 0), vec![Direction::East, Direction::South]);
        assert_eq!(route.to_string(), "(0, 0) [east, south]");
    }

    #[test]
    fn test_serde_shape() {
        let route = Route::from_directions(Coordinate::new(2, 3), vec![Direction::West]);
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"start":{"x":2,"y":3},"directions":["West"]}"#);
    }

    proptest! {
        #[test]
        fn test_replay_tracks_pushes_and_pops(ops in prop::collection::vec(0usize..5, 0..64)) {
            let start = Coordinate::new(0, 0);
            let mut route = Route::new(start);
            let mut position = start;
            for op in ops {
                if let Some(d) = Direction::from_index(op) {
                    route.add(d);
                    position = position.add_direction(d);
                } else if let Ok(d) = route.remove_last() {
                    position = position.subtract_direction(d);
                } else {
                    prop_assert!(route.is_empty());
                }
                prop_assert_eq!(route.end(), position);
            }
        }
    }
}
