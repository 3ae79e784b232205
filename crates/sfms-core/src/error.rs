//! Error types for sfms-core

/// Result type for sfms-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in container operations.
///
/// The first three variants are the logical signals callers are expected to
/// handle at every call site; `Backend` and `Engine` are storage faults that
/// are never folded into them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path is not registered in the container
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// The path is already registered in the container
    #[error("File already exists: {path}")]
    AlreadyExists { path: String },

    /// The supplied path fails file-name legality validation
    #[error("Invalid file name `{path}`: {reason}")]
    InvalidName { path: String, reason: String },

    /// Fault from the SQLite backing store
    #[error(transparent)]
    Backend(#[from] rusqlite::Error),

    /// Engine-level failure: poisoned store lock or a failed blocking task
    #[error("Storage engine failure: {message}")]
    Engine { message: String },
}

impl Error {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    pub fn invalid_name(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }
}
