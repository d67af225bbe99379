//! Route export.
//!
//! The text format lists the step count followed by one direction index per
//! line (east=0, north=1, west=2, south=3):
//!
//! ```text
//! 4;
//! 0;
//! 0;
//! 1;
//! 1;
//! ```
//!
//! It does not record the start cell, so reading a route back needs the
//! path specification it was solved for.

use crate::error::{IoError, Result};
use crate::serialization::write_json_file;
use pheromaze_data::{Coordinate, Direction, Route};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[must_use]
pub fn format_route(route: &Route) -> String {
    let mut out = String::with_capacity(4 * (route.size() + 1));
    let _ = writeln!(out, "{};", route.size());
    for d in route.directions() {
        let _ = writeln!(out, "{};", d.index());
    }
    out
}

pub fn parse_route(content: &str, start: Coordinate) -> Result<Route> {
    let mut entries = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .map(|(line_no, l)| {
            let value = l.strip_suffix(';').unwrap_or(l).trim();
            value
                .parse::<usize>()
                .map(|v| (line_no, v))
                .map_err(|e| IoError::parse(line_no, format!("invalid number '{value}': {e}")))
        });

    let (_, size) = entries
        .next()
        .ok_or_else(|| IoError::validation("route file is empty"))??;

    let mut route = Route::new(start);
    for entry in entries {
        let (line_no, index) = entry?;
        let direction = Direction::from_index(index)
            .ok_or_else(|| IoError::parse(line_no, format!("unknown direction index {index}")))?;
        route.add(direction);
    }

    if route.size() != size {
        return Err(IoError::validation(format!(
            "header declares {size} steps, found {}",
            route.size()
        )));
    }
    Ok(route)
}

/// Writes `route` in the text format.
pub fn write_route<P: AsRef<Path>>(route: &Route, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_route(route))
        .map_err(|e| IoError::from(e).with_context(format!("writing route {}", path.display())))?;
    tracing::info!(path = %path.display(), size = route.size(), "Route written");
    Ok(())
}

pub fn read_route<P: AsRef<Path>>(path: P, start: Coordinate) -> Result<Route> {
    let content = fs::read_to_string(path)?;
    parse_route(&content, start)
}

/// Writes `route` as JSON, including its start cell.
pub fn write_route_json<P: AsRef<Path>>(route: &Route, path: P) -> Result<()> {
    write_json_file(route, path)
}
