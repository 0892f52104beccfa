//! Catalog sources.
//!
//! The statistics engine never reaches for album data on its own; callers
//! hand it a slice obtained from a [`CatalogSource`]. Production code reads
//! a JSON export with [`JsonFileSource`], tests use [`MemorySource`].
//!
//! # Example
//!
//! ```ignore
//! use vinyl_stats::catalog::{CatalogSource, JsonFileSource};
//!
//! let albums = JsonFileSource::new("catalog.json").load()?;
//! let report = vinyl_stats::stats::compute(&albums);
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{Error, Result, ResultExt};
use crate::model::AlbumRecord;

/// Something that can produce the album list.
pub trait CatalogSource {
    fn load(&self) -> Result<Vec<AlbumRecord>>;
}

/// A JSON catalog file.
///
/// Accepts either a top-level array of album objects or an object with an
/// `albums` array.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<AlbumRecord>> {
        if !self.path.exists() {
            return Err(Error::not_found(&self.path));
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(format!("reading {}", self.path.display()))?;
        let albums =
            parse_catalog(&contents).with_context(format!("parsing {}", self.path.display()))?;

        info!(target: "catalog", path = %self.path.display(), records = albums.len(), "Loaded catalog");
        Ok(albums)
    }
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    albums: Vec<AlbumRecord>,
}

impl MemorySource {
    pub fn new(albums: Vec<AlbumRecord>) -> Self {
        Self { albums }
    }
}

impl CatalogSource for MemorySource {
    fn load(&self) -> Result<Vec<AlbumRecord>> {
        Ok(self.albums.clone())
    }
}

/// Parse a JSON catalog document.
///
/// Entries that are not objects are skipped with a warning. Within an
/// object, unknown keys are ignored and loosely typed values are accepted
/// (see [`AlbumRecord`]).
pub fn parse_catalog(json: &str) -> Result<Vec<AlbumRecord>> {
    let document: Value = serde_json::from_str(json)?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("albums") {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(Error::invalid_format("\"albums\" is not an array")),
            None => return Err(Error::invalid_format("object has no \"albums\" array")),
        },
        _ => {
            return Err(Error::invalid_format(
                "expected an array of albums or an object with an \"albums\" array",
            ));
        }
    };

    let mut albums = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            warn!(target: "catalog", index = i, "Skipping non-object catalog entry");
            continue;
        }
        albums.push(serde_json::from_value(entry)?);
    }
    Ok(albums)
}
