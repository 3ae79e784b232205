//! Adapter boundary for the sfms container
//!
//! Everything a transport front end (HTTP controller, CLI) needs to sit on
//! top of [`sfms_core`] without the core knowing about wire formats:
//!
//! - [`FileMeta`]: the typed schema serialized into the opaque meta string
//! - [`payload`]: base64 content decoding/encoding for upload transports
//! - [`ResponseKind`]: the error → response-category mapping
//! - [`ops`]: request-shaped compositions of container calls
//!
//! No routing, servers or protocol types live here; this crate stops at
//! the translation boundary.

pub mod error;
pub mod meta;
pub mod ops;
pub mod payload;
pub mod response;

pub use error::{Error, Result};
pub use meta::FileMeta;
pub use ops::{download, write_encoded};
pub use payload::{decode_content, encode_content};
pub use response::ResponseKind;
