//! Schema loading — the single fetch of the JSON document resource.
//!
//! The legacy page swallowed both failure modes (an empty container on
//! transport failure, an aborted render on a malformed payload). Here both
//! are explicit: [`LoadError::Fetch`] for a failed resource read and
//! [`LoadError::Schema`] for a payload that does not match the document
//! schema. Happy-path output is unchanged.

use crate::model::Document;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch schema resource {path}: {source}")]
    Fetch { path: String, source: io::Error },

    #[error("malformed document schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Read and deserialize a document schema from a file path.
pub fn from_path(path: &Path) -> Result<Document, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Fetch {
        path: path.display().to_string(),
        source,
    })?;
    from_str(&content)
}

/// Deserialize a document schema from a JSON string.
pub fn from_str(content: &str) -> Result<Document, LoadError> {
    Ok(serde_json::from_str(content)?)
}
