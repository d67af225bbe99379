//! Wall map and pheromone field over a fixed-size grid.
//!
//! Both grids are stored row-major in flat vectors. Bounds are half-open,
//! `[0, width) x [0, length)`, for every read and write.

use crate::error::{AcoError, Result};
use pheromaze_data::{Coordinate, Direction, Route, SurroundingPheromone};
use rayon::prelude::*;
use std::fmt;

pub const OPEN: u8 = 1;
pub const WALL: u8 = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: usize,
    length: usize,
    walls: Vec<u8>,
    pheromones: Vec<f64>,
}

impl Maze {
    /// Builds a maze from a column-major wall grid (`walls[x][y]`), where
    /// `1` marks an accessible cell and `0` a blocked one.
    ///
    /// Pheromone starts equal to the wall value.
    pub fn new(walls: Vec<Vec<u8>>, width: usize, length: usize) -> Result<Self> {
        if width == 0 || length == 0 {
            return Err(AcoError::InvalidMaze(format!(
                "dimensions must be positive, got {width}x{length}"
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(length).is_err() {
            return Err(AcoError::InvalidMaze(format!(
                "dimensions {width}x{length} exceed the coordinate range"
            )));
        }
        if walls.len() != width {
            return Err(AcoError::InvalidMaze(format!(
                "expected {width} columns, got {}",
                walls.len()
            )));
        }

        let mut flat = vec![WALL; width * length];
        for (x, column) in walls.iter().enumerate() {
            if column.len() != length {
                return Err(AcoError::InvalidMaze(format!(
                    "column {x} has {} cells, expected {length}",
                    column.len()
                )));
            }
            for (y, &cell) in column.iter().enumerate() {
                if cell != OPEN && cell != WALL {
                    return Err(AcoError::InvalidMaze(format!(
                        "cell ({x}, {y}) has value {cell}, expected 0 or 1"
                    )));
                }
                flat[y * width + x] = cell;
            }
        }

        let pheromones = Self::initial_pheromones(&flat);
        Ok(Self {
            width,
            length,
            walls: flat,
            pheromones,
        })
    }

    /// A maze with no blocked cells.
    pub fn open(width: usize, length: usize) -> Result<Self> {
        Self::new(vec![vec![OPEN; length]; width], width, length)
    }

    fn initial_pheromones(walls: &[u8]) -> Vec<f64> {
        walls.iter().map(|&w| f64::from(w)).collect()
    }

    /// Restores the pheromone field to its initial state.
    pub fn reset(&mut self) {
        self.pheromones = Self::initial_pheromones(&self.walls);
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn in_bounds(&self, position: &Coordinate) -> bool {
        position.x_between(0, self.width as i32) && position.y_between(0, self.length as i32)
    }

    #[inline(always)]
    fn index(&self, position: &Coordinate) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.y as usize * self.width + position.x as usize)
    }

    #[must_use]
    pub fn is_accessible(&self, position: &Coordinate) -> bool {
        self.index(position)
            .is_some_and(|idx| self.walls[idx] == OPEN)
    }

    /// Pheromone on a cell, or `None` outside the maze.
    #[must_use]
    pub fn pheromone(&self, position: &Coordinate) -> Option<f64> {
        self.index(position).map(|idx| self.pheromones[idx])
    }

    #[must_use]
    pub fn total_pheromone(&self) -> f64 {
        self.pheromones.iter().sum()
    }

    /// Pheromone on the four neighbours of `position`, in [`Direction::ALL`]
    /// order. Neighbours outside the maze read as zero.
    ///
    /// Returns `None` if `position` itself is outside the maze.
    #[must_use]
    pub fn get_surrounding_pheromone(&self, position: &Coordinate) -> Option<SurroundingPheromone> {
        if !self.in_bounds(position) {
            return None;
        }
        let readings = Direction::ALL.map(|d| {
            self.pheromone(&position.add_direction(d))
                .unwrap_or(0.0)
        });
        Some(SurroundingPheromone::from_array(readings))
    }

    /// Multiplies every cell by `1 - rho`. `rho` must lie in `[0, 1]`.
    pub fn evaporate(&mut self, rho: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&rho) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation factor {rho} outside [0, 1]"
            )));
        }
        let keep = 1.0 - rho;
        self.pheromones.par_iter_mut().for_each(|p| *p *= keep);
        Ok(())
    }

    /// Pheromone levels as rows, `y = 0` first.
    #[must_use]
    pub fn pheromone_grid(&self) -> Vec<Vec<f64>> {
        self.pheromones
            .chunks(self.width)
            .map(<[f64]>::to_vec)
            .collect()
    }

    /// The pheromone field laid out like the maze file, three decimals per cell.
    #[must_use]
    pub fn pheromone_table(&self) -> String {
        self.pheromones
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|p| format!("{p:.3}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Adds `q / route.size()` to every cell the route leaves from.
    ///
    /// The whole route is checked against the bounds before anything is
    /// written. An empty route deposits nothing.
    pub fn add_pheromone_route(&mut self, route: &Route, q: f64) -> Result<()> {
        let cells = self.route_cells(route)?;
        self.commit(&cells, Self::deposit_amount(route, q));
        Ok(())
    }

    /// Deposits every route of a generation.
    ///
    /// Cell lookups run in parallel; the additions are committed in route
    /// order so the resulting field does not depend on thread scheduling.
    pub fn add_pheromone_routes(&mut self, routes: &[Route], q: f64) -> Result<()> {
        let deposits = routes
            .par_iter()
            .map(|route| -> Result<(Vec<usize>, f64)> {
                Ok((self.route_cells(route)?, Self::deposit_amount(route, q)))
            })
            .collect::<Result<Vec<_>>>()?;

        for (cells, amount) in &deposits {
            self.commit(cells, *amount);
        }
        Ok(())
    }

    fn deposit_amount(route: &Route, q: f64) -> f64 {
        if route.is_empty() {
            0.0
        } else {
            q / route.size() as f64
        }
    }

    fn route_cells(&self, route: &Route) -> Result<Vec<usize>> {
        route
            .coordinates()
            .map(|c| self.index(&c).ok_or(AcoError::OutOfBounds(c)))
            .collect()
    }

    fn commit(&mut self, cells: &[usize], amount: f64) {
        for &idx in cells {
            self.pheromones[idx] += amount;
        }
    }
}

/// Formats the maze in the text layout the loader reads.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.length)?;
        for row in self.walls.chunks(self.width) {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
