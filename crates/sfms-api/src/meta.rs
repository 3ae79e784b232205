//! Typed metadata schema over the container's opaque meta string
//!
//! The core stores and returns metadata as an opaque blob; this schema is
//! the adapter-side interpretation of it and can be swapped without
//! touching the engine.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Caller-facing file metadata, serialized to JSON into `Entry::meta`.
///
/// Field names keep the wire shape of the original service
/// (`OriginalFileName`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileMeta {
    /// Name the file had on the uploader's side, before it was registered
    /// under a container path
    #[serde(default)]
    pub original_file_name: String,
}

impl FileMeta {
    pub fn new(original_file_name: impl Into<String>) -> Self {
        Self {
            original_file_name: original_file_name.into(),
        }
    }

    /// Serialize into the opaque meta string stored by the container.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored meta string.
    ///
    /// A blank blob means "no metadata set" and yields the default.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
