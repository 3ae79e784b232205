//! Error types for sfms-api

/// Result type for sfms-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the adapter boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Base64 content payload could not be decoded
    #[error("Invalid base64 content payload: {0}")]
    ContentDecode(#[from] base64::DecodeError),

    /// Metadata blob could not be parsed into the typed schema
    #[error("Invalid file metadata: {0}")]
    MetaParse(#[from] serde_json::Error),

    /// Error surfaced from the container core
    #[error(transparent)]
    Core(#[from] sfms_core::Error),
}
