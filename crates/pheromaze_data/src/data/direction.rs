use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four grid moves.
///
/// The discriminant doubles as the wire index used by route files and as the
/// slot a direction occupies in every weight vector, so [`Direction::ALL`] is
/// the only order in which directions are ever iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

/// Unit offsets indexed by [`Direction::index`].
const OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// `(dx, dy)` applied to a coordinate when moving this way.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        OFFSETS[self as usize]
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::North => "north",
            Direction::West => "west",
            Direction::South => "south",
        };
        f.write_str(name)
    }
}
