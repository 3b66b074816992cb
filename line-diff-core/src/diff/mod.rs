//! Core positional line diffing.

pub mod engine;
pub mod result;

pub use engine::{diff, diff_with_options, DiffOptions, NEW_HEADER, OLD_HEADER};
pub use result::DiffLine;
