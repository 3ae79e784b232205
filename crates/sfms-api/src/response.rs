//! Mapping from container errors to transport response categories
//!
//! The adapter owns the translation of the core's logical signals into
//! protocol-level outcomes; the engine itself knows nothing about wire
//! semantics.

use crate::Error;

/// Transport-agnostic response category for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Lookup target is unregistered (HTTP adapters: 404)
    NotFound,

    /// Write/rename destination is occupied (HTTP adapters: 409)
    Conflict,

    /// Malformed path, name or payload (HTTP adapters: 400)
    BadRequest,

    /// Backend or engine fault, never mapped onto a logical signal
    /// (HTTP adapters: 500)
    Internal,
}

impl From<&Error> for ResponseKind {
    fn from(err: &Error) -> Self {
        match err {
            Error::ContentDecode(_) | Error::MetaParse(_) => Self::BadRequest,
            Error::Core(core) => match core {
                sfms_core::Error::NotFound { .. } => Self::NotFound,
                sfms_core::Error::AlreadyExists { .. } => Self::Conflict,
                sfms_core::Error::InvalidName { .. } => Self::BadRequest,
                sfms_core::Error::Backend(_) | sfms_core::Error::Engine { .. } => Self::Internal,
            },
        }
    }
}
