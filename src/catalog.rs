//! Loading stations and route results from JSON
//!
//! The renderer itself never performs I/O; these helpers cover the boundary
//! where a host (or the CLI) has already fetched catalog and route payloads
//! and needs them as typed values. Failures here are explicit and surface to
//! the caller; the render core downstream cannot fail.

use std::path::Path;

use thiserror::Error;

use crate::model::{RouteResult, Station};

/// Errors that can occur when loading catalog or route payloads
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read input file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse a station list from a JSON string
pub fn stations_from_str(content: &str) -> Result<Vec<Station>, CatalogError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a station list from a JSON file
pub fn stations_from_file(path: &Path) -> Result<Vec<Station>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    stations_from_str(&content)
}

/// Parse a route result from a JSON string.
///
/// Missing `path` or `segments` fields deserialize to an empty route; only
/// syntactically invalid JSON is an error.
pub fn route_from_str(content: &str) -> Result<RouteResult, CatalogError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a route result from a JSON file
pub fn route_from_file(path: &Path) -> Result<RouteResult, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    route_from_str(&content)
}
