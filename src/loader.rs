//! Listing catalog loading from JSON files.
//!
//! The catalog file is a flat JSON array of listings:
//!
//! ```json
//! [
//!   {"id": "abc", "length": 50, "width": 20, "location_id": "east", "price_in_cents": 10000}
//! ]
//! ```
//!
//! Loading happens once at startup, before any request is served.

use std::path::Path;

use tracing::info;

use crate::domain::{Listing, StorageCatalog};

/// Error type for catalog loading.
#[derive(Debug)]
pub enum LoaderError {
    /// Could not read the catalog file.
    Io(std::io::Error),
    /// The file is not a valid listing array.
    Parse(serde_json::Error),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(e) => write!(f, "I/O error: {}", e),
            LoaderError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        LoaderError::Io(e)
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(e: serde_json::Error) -> Self {
        LoaderError::Parse(e)
    }
}

/// Parses a listing array from JSON text.
pub fn parse_listings(json: &str) -> Result<Vec<Listing>, LoaderError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads and groups a listing catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<StorageCatalog, LoaderError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let listings = parse_listings(&json)?;

    info!(
        path = %path.display(),
        listings = listings.len(),
        "loaded listing catalog"
    );

    Ok(StorageCatalog::from_listings(listings))
}
