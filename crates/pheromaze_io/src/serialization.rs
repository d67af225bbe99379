//! JSON helpers used for route and report export.

use crate::error::{IoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}

pub fn to_json_pretty<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Deserializes `json`, rejecting blank input up front.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON document"));
    }
    Ok(serde_json::from_str(json)?)
}

/// Writes `data` as pretty-printed JSON.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = to_json_pretty(data)?;
    fs::write(&path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing JSON to {}", path.as_ref().display()))
    })
}

pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {}", path.as_ref().display()))
    })?;
    from_json(&json)
}
