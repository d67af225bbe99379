//! Maze text format.
//!
//! ```text
//! <width> <length>
//! <width tokens of 0/1 for y = 0>
//! ...
//! <width tokens of 0/1 for y = length - 1>
//! ```
//!
//! Token `x` on row `y` becomes `walls[x][y]`; `1` is accessible.

use crate::error::{IoError, Result};
use pheromaze_core::{AcoError, Maze};
use std::fs;
use std::path::Path;

pub fn parse_maze(content: &str) -> Result<Maze> {
    let mut lines = content.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| IoError::validation("maze file is empty"))?;
    let (width, length) = parse_header(header_no, header)?;
    if width == 0 || length == 0 {
        return Err(AcoError::InvalidMaze(format!(
            "dimensions must be positive, got {width}x{length}"
        ))
        .into());
    }

    // Rows are checked before the grid is allocated, so the header alone
    // cannot size an allocation.
    let mut rows: Vec<Vec<u8>> = Vec::new();
    for y in 0..length {
        let (line_no, line) = lines.next().ok_or_else(|| {
            IoError::parse(header_no + y + 1, format!("missing row {y} of {length}"))
        })?;
        rows.push(parse_row(line_no, line, width)?);
    }

    if let Some((line_no, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(IoError::parse(line_no, "unexpected content after the last row"));
    }

    let walls: Vec<Vec<u8>> = (0..width)
        .map(|x| rows.iter().map(|row| row[x]).collect())
        .collect();
    Ok(Maze::new(walls, width, length)?)
}

fn parse_row(line_no: usize, line: &str, width: usize) -> Result<Vec<u8>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != width {
        return Err(IoError::parse(
            line_no,
            format!("expected {width} cells, found {}", tokens.len()),
        ));
    }
    tokens
        .into_iter()
        .enumerate()
        .map(|(x, token)| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(IoError::parse(
                line_no,
                format!("cell {x} is '{other}', expected 0 or 1"),
            )),
        })
        .collect()
}

fn parse_header(line_no: usize, header: &str) -> Result<(usize, usize)> {
    let dims: Vec<&str> = header.split_whitespace().collect();
    let [width, length] = dims.as_slice() else {
        return Err(IoError::parse(line_no, "header must be '<width> <length>'"));
    };
    let parse_dim = |s: &str| {
        s.parse::<usize>()
            .map_err(|e| IoError::parse(line_no, format!("invalid dimension '{s}': {e}")))
    };
    Ok((parse_dim(*width)?, parse_dim(*length)?))
}

/// Reads and parses a maze file.
pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let path = path.as_ref();
    let maze = fs::read_to_string(path)
        .map_err(IoError::from)
        .and_then(|content| parse_maze(&content))
        .map_err(|e| e.with_context(format!("reading maze {}", path.display())))?;
    tracing::info!(
        path = %path.display(),
        width = maze.width(),
        length = maze.length(),
        "Loaded maze"
    );
    Ok(maze)
}

/// Writes the wall layout of `maze` in the format [`read_maze`] accepts.
pub fn write_maze<P: AsRef<Path>>(maze: &Maze, path: P) -> Result<()> {
    fs::write(path, maze.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pheromaze_data::Coordinate;

    #[test]
    fn test_parse_is_column_major() {
        let maze = parse_maze("3 2\n1 0 1\n1 1 0\n").unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.length(), 2);
        assert!(!maze.is_accessible(&Coordinate::new(1, 0)));
        assert!(!maze.is_accessible(&Coordinate::new(2, 1)));
        assert!(maze.is_accessible(&Coordinate::new(2, 0)));
        // the last row and column are inside the maze
        assert!(maze.in_bounds(&Coordinate::new(2, 1)));
        assert!(!maze.in_bounds(&Coordinate::new(3, 1)));
    }

    #[test]
    fn test_tolerates_extra_spaces_and_trailing_blank_lines() {
        let maze = parse_maze("2 2 \n1  1 \n 0 1\n\n\n").unwrap();
        assert_eq!(maze.total_pheromone(), 3.0);
    }

    #[test]
    fn test_missing_row() {
        let err = parse_maze("2 3\n1 1\n1 1\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn test_short_row() {
        let err = parse_maze("3 1\n1 1\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_bad_token() {
        let err = parse_maze("2 1\n1 x\n").unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(
            parse_maze("3\n1 1 1\n").unwrap_err(),
            IoError::Parse { line: 1, .. }
        ));
        assert!(matches!(
            parse_maze("a 1\n1\n").unwrap_err(),
            IoError::Parse { line: 1, .. }
        ));
        assert!(matches!(parse_maze("").unwrap_err(), IoError::Validation(_)));
    }

    #[test]
    fn test_zero_dimensions_rejected_by_engine() {
        assert!(matches!(parse_maze("0 0\n").unwrap_err(), IoError::Maze(_)));
    }

    #[test]
    fn test_oversized_header_is_a_parse_error() {
        let err = parse_maze("4000000000 4000000000\n1\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }), "{err}");

        let err = parse_maze("2 4000000000\n1 1\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 3, .. }), "{err}");

        assert!(matches!(
            parse_maze("4000000000 0\n").unwrap_err(),
            IoError::Maze(AcoError::InvalidMaze(_))
        ));
    }

    #[test]
    fn test_trailing_garbage() {
        let err = parse_maze("1 1\n1\n1\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        let maze = parse_maze("3 2\n1 0 1\n1 1 1\n").unwrap();
        write_maze(&maze, &path).unwrap();
        assert_eq!(read_maze(&path).unwrap(), maze);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = read_maze("no/such/maze.txt").unwrap_err();
        assert!(matches!(err, IoError::Context { .. }));
        assert!(err.to_string().contains("no/such/maze.txt"));
    }
}
