//! Path-addressed virtual file container engine
//!
//! This crate provides the storage core of the simple file management
//! system: a container that maps hierarchical virtual paths (e.g.
//! `/aa/bb/a.1`) to entries holding binary content and an opaque metadata
//! string, without those paths existing on any real filesystem.
//!
//! - **Container**: CRUD + prefix listing facade enforcing the existence
//!   invariants (no silent overwrite, no rename onto an occupied path)
//! - **ContainerPath**: canonicalization and file-name legality validation
//! - **StoreLocation**: explicit durable-on-disk vs. per-instance
//!   in-memory configuration
//! - **Error taxonomy**: `NotFound`, `AlreadyExists`, `InvalidName` as the
//!   only logical signals, backend faults kept distinct
//!
//! # Example
//!
//! ```
//! use sfms_core::{Container, Result};
//!
//! fn example() -> Result<()> {
//!     let container = Container::open_memory()?;
//!     let entry = container.write("/aa/bb/a.2", &[0xAA, 0xBB, 0xCC])?;
//!     assert_eq!(entry.original_size, 3);
//!     let content = container.read(&entry)?;
//!     assert_eq!(content.data, vec![0xAA, 0xBB, 0xCC]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod container;
pub mod entry;
pub mod error;
pub mod path;
mod store;

pub use container::Container;
pub use entry::{Content, Entry};
pub use error::{Error, Result};
pub use path::ContainerPath;
pub use store::StoreLocation;
