use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading a configuration snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file.
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot bytes were not valid UTF-8.
    #[error("snapshot is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode snapshot bytes into diff-ready text.
///
/// CRLF sequences are normalized to `\n` so snapshots exported from
/// Windows browsers diff cleanly against device-side ones.
pub fn load(bytes: &[u8]) -> Result<String, SnapshotError> {
    let text = String::from_utf8(bytes.to_vec())?;
    Ok(text.replace("\r\n", "\n"))
}

/// Read and decode a snapshot file.
pub fn load_file(path: &Path) -> Result<String, SnapshotError> {
    let bytes = fs::read(path)?;
    load(&bytes)
}
