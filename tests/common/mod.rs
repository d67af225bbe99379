pub mod macros;

use pheromaze_lib::model::config::{ColonyConfig, RngMode};
use pheromaze_lib::model::{Coordinate, Maze, PathSpecification};

/// Builds mazes from ASCII art. `#` is a wall, anything else is open.
///
/// Rows are given top to bottom, so the last row is `y = 0`.
#[allow(dead_code)]
pub struct MazeBuilder {
    rows: Vec<String>,
    start: Coordinate,
    end: Option<Coordinate>,
    config: ColonyConfig,
}

#[allow(dead_code)]
impl MazeBuilder {
    pub fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| (*r).to_string()).collect(),
            start: Coordinate::new(0, 0),
            end: None,
            config: ColonyConfig {
                ants_per_gen: 10,
                generations: 20,
                seed: Some(42),
                ..ColonyConfig::default()
            },
        }
    }

    pub fn open(width: usize, length: usize) -> Self {
        let row = ".".repeat(width);
        let rows: Vec<&str> = (0..length).map(|_| row.as_str()).collect();
        Self::new(&rows)
    }

    pub fn from(mut self, x: i32, y: i32) -> Self {
        self.start = Coordinate::new(x, y);
        self
    }

    pub fn to(mut self, x: i32, y: i32) -> Self {
        self.end = Some(Coordinate::new(x, y));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_colony(mut self, ants_per_gen: usize, generations: usize) -> Self {
        self.config.ants_per_gen = ants_per_gen;
        self.config.generations = generations;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut ColonyConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.config.parallel = false;
        self
    }

    pub fn shared_rng(mut self) -> Self {
        self.config.rng_mode = RngMode::Shared;
        self
    }

    fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.chars().count())
    }

    /// Maze file text for the same layout.
    pub fn maze_text(&self) -> String {
        let length = self.rows.len();
        let mut out = format!("{} {}\n", self.width(), length);
        for row in self.rows.iter().rev() {
            let cells: Vec<&str> = row
                .chars()
                .map(|c| if c == '#' { "0" } else { "1" })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }

    /// Coordinate file text for the configured endpoints.
    pub fn coordinates_text(&self) -> String {
        let end = self.end_or_corner();
        format!("{}, {};\n{}, {};\n", self.start.x, self.start.y, end.x, end.y)
    }

    fn end_or_corner(&self) -> Coordinate {
        self.end.unwrap_or_else(|| {
            Coordinate::new(self.width() as i32 - 1, self.rows.len() as i32 - 1)
        })
    }

    pub fn build(self) -> (Maze, PathSpecification, ColonyConfig) {
        let width = self.width();
        let length = self.rows.len();
        let mut walls = vec![vec![1u8; length]; width];
        for (row_idx, row) in self.rows.iter().enumerate() {
            let y = length - 1 - row_idx;
            assert_eq!(row.chars().count(), width, "ragged maze row {row_idx}");
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    walls[x][y] = 0;
                }
            }
        }
        let spec = PathSpecification::new(self.start, self.end_or_corner());
        let maze = Maze::new(walls, width, length).expect("Failed to create maze in test builder");
        (maze, spec, self.config)
    }
}
