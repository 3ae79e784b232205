//! SQLite-backed entry and content storage

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use crate::{Content, Entry, Error, Result};

/// Where a container keeps its state.
///
/// The two modes are explicit: callers must choose between a durable
/// on-disk database and a private in-memory one. There is no shared
/// default location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Durable database file; mutations survive process restart
    Disk(PathBuf),

    /// Private in-memory database scoped to this instance.
    ///
    /// Never backed by SQLite shared-cache named memory databases: those
    /// silently alias "independent" instances onto one shared store, which
    /// breaks per-test isolation. Every `Memory` store is physically its
    /// own database.
    Memory,
}

/// The backing store: one table keyed by normalized path, holding the
/// (meta, size, content) triple per entry.
///
/// A single connection guarded by a mutex serializes all statements, which
/// gives per-operation atomicity for the paired entry+content mutations.
pub(crate) struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    pub(crate) fn open(location: &StoreLocation) -> Result<Self> {
        let conn = match location {
            StoreLocation::Disk(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_FULL_MUTEX,
            )?,
            StoreLocation::Memory => Connection::open_in_memory()?,
        };
        if matches!(location, StoreLocation::Disk(_)) {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA busy_timeout = 5000;",
            )?;
        }
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS entries (
                path TEXT PRIMARY KEY,
                meta TEXT NOT NULL DEFAULT '',
                size INTEGER NOT NULL DEFAULT 0,
                content BLOB NOT NULL DEFAULT X''
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| Error::engine(format!("store lock poisoned: {e}")))
    }

    pub(crate) fn get(&self, path: &str) -> Result<Option<Entry>> {
        let conn = self.lock()?;
        let entry = conn
            .query_row(
                "SELECT path, meta, size FROM entries WHERE path = ?1",
                params![path],
                row_to_entry,
            )
            .optional()?;
        Ok(entry)
    }

    pub(crate) fn list(&self, prefix: &str) -> Result<Vec<Entry>> {
        let conn = self.lock()?;
        // Ordered range scan over the primary key: start at the prefix and
        // stop at the first path that no longer matches it.
        let mut stmt = conn
            .prepare("SELECT path, meta, size FROM entries WHERE path >= ?1 ORDER BY path")?;
        let rows = stmt.query_map(params![prefix], row_to_entry)?;
        let mut entries = Vec::new();
        for row in rows {
            let entry = row?;
            if !entry.path.starts_with(prefix) {
                break;
            }
            entries.push(entry);
        }
        Ok(entries)
    }

    pub(crate) fn touch(&self, path: &str) -> Result<Entry> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR IGNORE INTO entries (path, meta, size, content) VALUES (?1, '', 0, X'')",
            params![path],
        )?;
        // Present either way: the freshly inserted placeholder or the
        // pre-existing entry, which touch leaves untouched.
        let entry = conn.query_row(
            "SELECT path, meta, size FROM entries WHERE path = ?1",
            params![path],
            row_to_entry,
        )?;
        Ok(entry)
    }

    pub(crate) fn insert(&self, path: &str, data: &[u8]) -> Result<Entry> {
        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT INTO entries (path, meta, size, content) VALUES (?1, '', ?2, ?3)",
            params![path, data.len() as i64, data],
        );
        match inserted {
            Ok(_) => Ok(Entry {
                path: path.to_string(),
                meta: String::new(),
                original_size: data.len() as u64,
            }),
            Err(e) if is_conflict(&e) => Err(Error::already_exists(path)),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn set_meta(&self, path: &str, meta: &str) -> Result<Entry> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE entries SET meta = ?2 WHERE path = ?1",
            params![path, meta],
        )?;
        if changed == 0 {
            return Err(Error::not_found(path));
        }
        let entry = conn.query_row(
            "SELECT path, meta, size FROM entries WHERE path = ?1",
            params![path],
            row_to_entry,
        )?;
        Ok(entry)
    }

    pub(crate) fn read(&self, path: &str) -> Result<Content> {
        let conn = self.lock()?;
        let data: Option<Vec<u8>> = conn
            .query_row(
                "SELECT content FROM entries WHERE path = ?1",
                params![path],
                |row| row.get(0),
            )
            .optional()?;
        match data {
            Some(data) => Ok(Content {
                path: path.to_string(),
                data,
            }),
            None => Err(Error::not_found(path)),
        }
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Entry> {
        let conn = self.lock()?;
        let entry = conn
            .query_row(
                "SELECT path, meta, size FROM entries WHERE path = ?1",
                params![path],
                row_to_entry,
            )
            .optional()?
            .ok_or_else(|| Error::not_found(path))?;
        conn.execute("DELETE FROM entries WHERE path = ?1", params![path])?;
        Ok(entry)
    }

    pub(crate) fn rename(&self, old: &str, new: &str) -> Result<Entry> {
        let conn = self.lock()?;
        // Rename onto the current path is a destination conflict, same as
        // any other occupied destination, but only once the source is
        // known to exist; an unregistered source is always NotFound.
        if old == new {
            let exists = conn
                .query_row(
                    "SELECT 1 FROM entries WHERE path = ?1",
                    params![old],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            return if exists {
                Err(Error::already_exists(new))
            } else {
                Err(Error::not_found(old))
            };
        }
        let changed = conn.execute(
            "UPDATE entries SET path = ?2 WHERE path = ?1",
            params![old, new],
        );
        match changed {
            Ok(0) => Err(Error::not_found(old)),
            Ok(_) => {
                let entry = conn.query_row(
                    "SELECT path, meta, size FROM entries WHERE path = ?1",
                    params![new],
                    row_to_entry,
                )?;
                Ok(entry)
            }
            Err(e) if is_conflict(&e) => Err(Error::already_exists(new)),
            Err(e) => Err(e.into()),
        }
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        path: row.get(0)?,
        meta: row.get(1)?,
        original_size: row.get::<_, i64>(2)? as u64,
    })
}

fn is_conflict(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
