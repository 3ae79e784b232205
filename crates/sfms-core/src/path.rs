//! Canonical container path handling

use crate::{Error, Result};

/// A canonical absolute path inside a container.
///
/// Container paths are virtual: they never touch the real filesystem. The
/// canonical form always starts with `/` and is the unique key into the
/// backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerPath {
    /// Internal representation, always absolute
    inner: String,
}

impl ContainerPath {
    /// Canonicalize a caller-supplied path string.
    ///
    /// A string without any `/` separator is treated as a single, possibly
    /// percent-encoded segment and decoded first. A leading `/` is enforced.
    /// Idempotent: normalizing an already-normalized path returns it
    /// unchanged.
    pub fn normalize(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let decoded = if raw.contains('/') {
            raw.to_string()
        } else {
            percent_decode(raw)
        };
        let inner = if decoded.starts_with('/') {
            decoded
        } else {
            format!("/{decoded}")
        };
        Self { inner }
    }

    /// Canonicalize and validate a path that must name a file.
    ///
    /// Returns [`Error::InvalidName`] when the normalized path is not a
    /// legal file path: root only, trailing `/`, empty segment, `.`/`..`
    /// segments, backslash, NUL or other control characters.
    pub fn normalize_file(raw: impl AsRef<str>) -> Result<Self> {
        let path = Self::normalize(raw.as_ref());
        path.validate_file_name()?;
        Ok(path)
    }

    /// Canonicalize a directory prefix used for listing.
    ///
    /// The empty prefix is preserved (it lists the whole container); any
    /// other prefix gets the same canonical form as paths so that stored
    /// keys and prefixes compare consistently.
    pub fn normalize_prefix(raw: impl AsRef<str>) -> String {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return String::new();
        }
        Self::normalize(raw).inner
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    fn validate_file_name(&self) -> Result<()> {
        let path = &self.inner;
        if path == "/" {
            return Err(Error::invalid_name(path, "path names no file"));
        }
        if path.ends_with('/') {
            return Err(Error::invalid_name(path, "trailing separator"));
        }
        if path.contains('\\') {
            return Err(Error::invalid_name(path, "backslash in path"));
        }
        if path.chars().any(|c| c.is_control()) {
            return Err(Error::invalid_name(path, "control character in path"));
        }
        // Skip the leading separator; every remaining segment must be
        // non-empty and must not be a relative reference.
        for segment in path[1..].split('/') {
            if segment.is_empty() {
                return Err(Error::invalid_name(path, "empty segment"));
            }
            if segment == "." || segment == ".." {
                return Err(Error::invalid_name(path, "relative segment"));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for ContainerPath {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for ContainerPath {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

/// Decode `%XX` escapes in a single path segment.
///
/// Malformed escapes are kept literally rather than rejected; legality is
/// enforced afterwards by file-name validation.
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
