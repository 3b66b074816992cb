use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::diff::result::DiffLine;
use crate::format::format_text;

/// Errors that can occur while exporting a diff.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write the export file.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    /// System clock reported a time before the Unix epoch.
    #[error("system clock is before the Unix epoch")]
    Clock,
}

/// Export filename for a given Unix-millisecond timestamp.
pub fn export_filename(unix_millis: u128) -> String {
    format!("config-diff-{unix_millis}.txt")
}

/// Write the diff to a timestamped file under `dir` and return its path.
///
/// The content is the [`format_text`] rendering plus a trailing newline.
/// Callers trigger this at most once per export action; there is no retry.
pub fn write_export(dir: &Path, lines: &[DiffLine]) -> Result<PathBuf, ExportError> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| ExportError::Clock)?
        .as_millis();

    let path = dir.join(export_filename(millis));
    let mut text = format_text(lines);
    text.push('\n');
    fs::write(&path, text)?;
    Ok(path)
}
