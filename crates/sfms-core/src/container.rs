//! Container facade over the backing store

use std::path::Path;
use std::sync::Arc;

use crate::store::Store;
use crate::{ContainerPath, Content, Entry, Error, Result, StoreLocation};

/// A virtual, path-addressed file container.
///
/// The container owns the path-to-entry mapping and enforces the existence
/// invariants: no silent overwrite, no rename onto an occupied destination,
/// no content without an entry. Clones share one backing store;
/// independently opened containers never share state.
///
/// Every operation has a synchronous and an asynchronous form with
/// identical result and error semantics; the `_async` forms only move the
/// backing-store I/O onto the blocking thread pool.
#[derive(Clone)]
pub struct Container {
    store: Arc<Store>,
}

impl Container {
    /// Open a container at an explicit store location.
    pub fn open(location: StoreLocation) -> Result<Self> {
        let store = Store::open(&location)?;
        Ok(Self {
            store: Arc::new(store),
        })
    }

    /// Open a durable container backed by a database file.
    pub fn open_disk(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(StoreLocation::Disk(path.as_ref().to_path_buf()))
    }

    /// Open an ephemeral container private to this instance.
    pub fn open_memory() -> Result<Self> {
        Self::open(StoreLocation::Memory)
    }

    /// Look up the entry registered at `path`.
    ///
    /// Absence is `Ok(None)`, not an error; callers decide whether a
    /// missing entry is a failure.
    pub fn get(&self, path: &str) -> Result<Option<Entry>> {
        let path = ContainerPath::normalize(path);
        self.store.get(path.as_str())
    }

    /// List every entry whose path starts with `prefix`, ordered by path.
    ///
    /// The empty prefix (or `/`) lists the whole container. An unknown
    /// prefix yields an empty vec, never an error.
    pub fn list(&self, prefix: &str) -> Result<Vec<Entry>> {
        let prefix = ContainerPath::normalize_prefix(prefix);
        self.store.list(&prefix)
    }

    /// Register a zero-length placeholder entry at `path`.
    ///
    /// Idempotent: an existing entry is left exactly as it is and returned.
    pub fn touch(&self, path: &str) -> Result<Entry> {
        let path = ContainerPath::normalize_file(path)?;
        tracing::debug!(path = %path, "touch");
        self.store.touch(path.as_str())
    }

    /// Create an entry at `path` and store `data` as its content.
    ///
    /// Fails with [`Error::AlreadyExists`] when the path is registered:
    /// there is no overwrite through this call, replacing content goes
    /// through delete-then-write.
    pub fn write(&self, path: &str, data: &[u8]) -> Result<Entry> {
        let path = ContainerPath::normalize_file(path)?;
        tracing::debug!(path = %path, size = data.len(), "write");
        self.store.insert(path.as_str(), data)
    }

    /// Replace the metadata string on an existing entry.
    ///
    /// Content and size are left untouched. Fails with [`Error::NotFound`]
    /// when the path is unregistered.
    pub fn set_meta(&self, path: &str, meta: &str) -> Result<Entry> {
        let path = ContainerPath::normalize(path);
        tracing::debug!(path = %path, "set_meta");
        self.store.set_meta(path.as_str(), meta)
    }

    /// Read the content owned by a previously resolved entry.
    ///
    /// [`Error::NotFound`] here means the backing row vanished underneath
    /// the entry, which only external tampering can cause.
    pub fn read(&self, entry: &Entry) -> Result<Content> {
        self.store.read(&entry.path)
    }

    /// Read content by path.
    pub fn read_path(&self, path: &str) -> Result<Content> {
        let path = ContainerPath::normalize(path);
        self.store.read(path.as_str())
    }

    /// Remove the entry and its content together.
    ///
    /// Returns the removed entry. Fails with [`Error::NotFound`] when the
    /// path is unregistered.
    pub fn delete(&self, path: &str) -> Result<Entry> {
        let path = ContainerPath::normalize(path);
        tracing::debug!(path = %path, "delete");
        self.store.delete(path.as_str())
    }

    /// Relocate an entry to `new`, preserving meta, size and content.
    ///
    /// Not a merge: fails with [`Error::NotFound`] when `old` is absent and
    /// [`Error::AlreadyExists`] when `new` is registered, including a
    /// rename onto the same path.
    pub fn rename(&self, old: &str, new: &str) -> Result<Entry> {
        let old = ContainerPath::normalize(old);
        let new = ContainerPath::normalize_file(new)?;
        tracing::debug!(from = %old, to = %new, "rename");
        self.store.rename(old.as_str(), new.as_str())
    }

    /// Asynchronous form of [`Container::get`].
    pub async fn get_async(&self, path: &str) -> Result<Option<Entry>> {
        let this = self.clone();
        let path = path.to_string();
        run_blocking(move || this.get(&path)).await
    }

    /// Asynchronous form of [`Container::list`].
    pub async fn list_async(&self, prefix: &str) -> Result<Vec<Entry>> {
        let this = self.clone();
        let prefix = prefix.to_string();
        run_blocking(move || this.list(&prefix)).await
    }

    /// Asynchronous form of [`Container::touch`].
    pub async fn touch_async(&self, path: &str) -> Result<Entry> {
        let this = self.clone();
        let path = path.to_string();
        run_blocking(move || this.touch(&path)).await
    }

    /// Asynchronous form of [`Container::write`].
    pub async fn write_async(&self, path: &str, data: Vec<u8>) -> Result<Entry> {
        let this = self.clone();
        let path = path.to_string();
        run_blocking(move || this.write(&path, &data)).await
    }

    /// Asynchronous form of [`Container::set_meta`].
    pub async fn set_meta_async(&self, path: &str, meta: &str) -> Result<Entry> {
        let this = self.clone();
        let path = path.to_string();
        let meta = meta.to_string();
        run_blocking(move || this.set_meta(&path, &meta)).await
    }

    /// Asynchronous form of [`Container::read`].
    pub async fn read_async(&self, entry: &Entry) -> Result<Content> {
        let this = self.clone();
        let entry = entry.clone();
        run_blocking(move || this.read(&entry)).await
    }

    /// Asynchronous form of [`Container::read_path`].
    pub async fn read_path_async(&self, path: &str) -> Result<Content> {
        let this = self.clone();
        let path = path.to_string();
        run_blocking(move || this.read_path(&path)).await
    }

    /// Asynchronous form of [`Container::delete`].
    pub async fn delete_async(&self, path: &str) -> Result<Entry> {
        let this = self.clone();
        let path = path.to_string();
        run_blocking(move || this.delete(&path)).await
    }

    /// Asynchronous form of [`Container::rename`].
    pub async fn rename_async(&self, old: &str, new: &str) -> Result<Entry> {
        let this = self.clone();
        let old = old.to_string();
        let new = new.to_string();
        run_blocking(move || this.rename(&old, &new)).await
    }
}

/// Run a store operation on the blocking pool.
///
/// The task runs to completion even if the caller's future is dropped, so
/// cancellation never leaves a half-applied operation behind.
async fn run_blocking<T, F>(op: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| Error::engine(format!("blocking task failed: {e}")))?
}
