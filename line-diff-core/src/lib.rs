//! Generic line-based diffing primitives used by higher-level tools.

pub mod diff;
pub mod export;
pub mod format;
pub mod snapshot;

pub use diff::{diff, diff_with_options, DiffLine, DiffOptions, NEW_HEADER, OLD_HEADER};
pub use export::{export_filename, write_export, ExportError};
pub use format::{format_json, format_summary, format_text};
pub use snapshot::{load, load_file, SnapshotError};
