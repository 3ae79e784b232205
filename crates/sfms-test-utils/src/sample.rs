//! [`SampleContainer`] fixture for container test scenarios.
//!
//! Seeds a private in-memory container with a known file tree so that
//! listing, lookup and mutation tests across the workspace share one set
//! of paths and expectations.

use sfms_core::{Container, Result};
use tempfile::TempDir;

/// A seeded path: placeholders carry no content, written files carry
/// bytes and optionally a pre-set meta blob.
#[derive(Debug, Clone)]
pub struct SeedFile {
    pub path: &'static str,
    pub content: Option<&'static [u8]>,
    pub meta: &'static str,
}

/// A container pre-populated with the standard sample tree.
///
/// # Example
///
/// ```rust
/// use sfms_test_utils::SampleContainer;
///
/// let sample = SampleContainer::in_memory().unwrap();
/// let entry = sample.container().get(SampleContainer::TEST_FILE_PATH).unwrap();
/// assert!(entry.is_some());
/// ```
pub struct SampleContainer {
    container: Container,
    // Kept alive for disk-backed fixtures; the database file lives here.
    _temp_dir: Option<TempDir>,
}

impl SampleContainer {
    /// A directory with several seeded files
    pub const TEST_DIR_PATH: &'static str = "/aa/bb/";
    /// A directory with no seeded files
    pub const EMPTY_DIR_PATH: &'static str = "/aa/xx/";
    /// A seeded file with content and meta
    pub const TEST_FILE_PATH: &'static str = "/aa/bb/a.1";
    /// A seeded zero-length placeholder
    pub const EMPTY_FILE_PATH: &'static str = "/aa/bb/a.empty";
    /// A path guaranteed to be unregistered
    pub const NOT_EXIST_FILE_PATH: &'static str = "/aa/bb/a.2";

    /// The standard seeded tree.
    pub fn seeds() -> Vec<SeedFile> {
        vec![
            SeedFile {
                path: Self::TEST_FILE_PATH,
                content: Some(&[0x01, 0x02, 0x03, 0x04]),
                meta: r#"{"OriginalFileName":"a-one.bin"}"#,
            },
            SeedFile {
                path: Self::EMPTY_FILE_PATH,
                content: None,
                meta: "",
            },
            SeedFile {
                path: "/aa/bb/cc/a.3",
                content: Some(b"nested"),
                meta: "",
            },
            SeedFile {
                path: "/aa/dd/b.1",
                content: Some(b"sibling"),
                meta: "",
            },
        ]
    }

    /// Build the fixture on a private in-memory store.
    pub fn in_memory() -> Result<Self> {
        let container = Container::open_memory()?;
        Self::seed(&container)?;
        Ok(Self {
            container,
            _temp_dir: None,
        })
    }

    /// Build the fixture on a temporary on-disk store.
    pub fn on_disk() -> Result<Self> {
        let temp_dir = TempDir::new().expect("failed to create fixture tempdir");
        let container = Container::open_disk(temp_dir.path().join("container.db"))?;
        Self::seed(&container)?;
        Ok(Self {
            container,
            _temp_dir: Some(temp_dir),
        })
    }

    /// The seeded container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Number of seeded paths starting with `prefix`, for listing
    /// assertions.
    pub fn count_seeded(prefix: &str) -> usize {
        Self::seeds()
            .iter()
            .filter(|s| s.path.starts_with(prefix))
            .count()
    }

    /// Content a seeded path was created with, if any.
    pub fn seeded_content(path: &str) -> Option<Vec<u8>> {
        Self::seeds().iter().find(|s| s.path == path).map(|s| {
            s.content
                .map(|c| c.to_vec())
                .unwrap_or_default()
        })
    }

    fn seed(container: &Container) -> Result<()> {
        for seed in Self::seeds() {
            match seed.content {
                None => {
                    container.touch(seed.path)?;
                }
                Some(content) => {
                    container.write(seed.path, content)?;
                    if !seed.meta.trim().is_empty() {
                        container.set_meta(seed.path, seed.meta)?;
                    }
                }
            }
        }
        Ok(())
    }
}
