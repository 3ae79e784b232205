//! Adapter-level operations composing container calls
//!
//! These mirror what a transport controller does with one request: decode
//! the payload, drive the container, and translate the result. They use
//! the asynchronous container forms since transport handlers are async.

use sfms_core::{Container, Entry};

use crate::{FileMeta, Result, payload};

/// Register a file from a base64-encoded upload.
///
/// Writes the decoded bytes at `path` and records the uploader-side file
/// name in the metadata. The write still refuses occupied paths, so a
/// repeated upload surfaces as a conflict.
pub async fn write_encoded(
    container: &Container,
    path: &str,
    original_file_name: &str,
    base64_payload: &str,
) -> Result<Entry> {
    let data = payload::decode_content(base64_payload)?;
    container.write_async(path, data).await?;
    let meta = FileMeta::new(original_file_name).to_json()?;
    Ok(container.set_meta_async(path, &meta).await?)
}

/// Resolve a file for download: its typed metadata plus raw bytes.
pub async fn download(container: &Container, path: &str) -> Result<(FileMeta, Vec<u8>)> {
    let content = container.read_path_async(path).await?;
    let meta = match container.get_async(path).await? {
        Some(entry) => FileMeta::from_json(&entry.meta)?,
        None => FileMeta::default(),
    };
    Ok((meta, content.data))
}
