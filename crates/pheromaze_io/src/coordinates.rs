//! Start/end coordinate files.
//!
//! Two non-blank lines, start first:
//!
//! ```text
//! 0, 0;
//! 34, 24;
//! ```

use crate::error::{IoError, Result};
use pheromaze_data::{Coordinate, PathSpecification};
use std::fs;
use std::path::Path;

pub fn parse_coordinates(content: &str) -> Result<PathSpecification> {
    let mut entries = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut next_coordinate = |what: &str| -> Result<Coordinate> {
        let (line_no, line) = entries
            .next()
            .ok_or_else(|| IoError::validation(format!("missing {what} coordinate")))?;
        parse_coordinate(line_no, line)
    };
    let start = next_coordinate("start")?;
    let end = next_coordinate("end")?;

    if let Some((line_no, _)) = entries.next() {
        return Err(IoError::parse(line_no, "expected exactly two coordinates"));
    }
    Ok(PathSpecification::new(start, end))
}

fn parse_coordinate(line_no: usize, line: &str) -> Result<Coordinate> {
    let body = line.strip_suffix(';').unwrap_or(line);
    let (x, y) = body
        .split_once(',')
        .ok_or_else(|| IoError::parse(line_no, format!("expected 'x, y;', found '{line}'")))?;
    let axis = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| IoError::parse(line_no, format!("invalid coordinate '{}': {e}", s.trim())))
    };
    Ok(Coordinate::new(axis(x)?, axis(y)?))
}

/// Reads a start/end coordinate file.
pub fn read_coordinates<P: AsRef<Path>>(path: P) -> Result<PathSpecification> {
    let path = path.as_ref();
    let spec = fs::read_to_string(path)
        .map_err(IoError::from)
        .and_then(|content| parse_coordinates(&content))
        .map_err(|e| e.with_context(format!("reading coordinates {}", path.display())))?;
    tracing::info!(start = %spec.start(), end = %spec.end(), "Loaded path specification");
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let spec = parse_coordinates("0, 0;\n34, 24;\n").unwrap();
        assert_eq!(spec.start(), Coordinate::new(0, 0));
        assert_eq!(spec.end(), Coordinate::new(34, 24));
    }

    #[test]
    fn test_semicolon_and_spacing_optional() {
        let spec = parse_coordinates("\n  3,4\n\n 5 ,  6 ; \n").unwrap();
        assert_eq!(spec.start(), Coordinate::new(3, 4));
        assert_eq!(spec.end(), Coordinate::new(5, 6));
    }

    #[test]
    fn test_missing_end() {
        let err = parse_coordinates("0, 0;\n").unwrap_err();
        assert!(err.to_string().contains("missing end"));
    }

    #[test]
    fn test_malformed_line() {
        let err = parse_coordinates("0 0;\n1, 1;\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }), "{err}");

        let err = parse_coordinates("0, 0;\n1, b;\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_extra_line_rejected() {
        let err = parse_coordinates("0, 0;\n1, 1;\n2, 2;\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coordinates.txt");
        fs::write(&path, "1, 2;\n3, 4;\n").unwrap();
        let spec = read_coordinates(&path).unwrap();
        assert_eq!(spec.end(), Coordinate::new(3, 4));
    }
}
