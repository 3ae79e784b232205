//! Entry and content records tracked by a container

use serde::{Deserialize, Serialize};

/// The bookkeeping record for a registered path.
///
/// An entry exists independently of whether its content is empty: a touched
/// placeholder is a real entry with `original_size == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Normalized absolute path; unique key
    pub path: String,

    /// Opaque caller-defined metadata payload; empty means "not set"
    #[serde(default)]
    pub meta: String,

    /// Byte length of the content at time of last write
    #[serde(default)]
    pub original_size: u64,
}

/// The raw byte payload owned by an [`Entry`].
///
/// Content is only reachable through its entry; the container never returns
/// bytes for a path that has no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Path of the owning entry
    pub path: String,

    /// Stored bytes
    pub data: Vec<u8>,
}
