use serde::Serialize;

/// A single line-level diff outcome.
///
/// Change lines carry the 1-based position of the line in whichever input
/// text it came from: the old text for `Removed`, the new text for `Added`,
/// and both (they are equal) for `Unchanged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffLine {
    /// Synthetic header line emitted before any content lines.
    Header { text: String },
    /// Line present only in the new text at this position.
    Added { text: String, line_number: usize },
    /// Line present only in the old text at this position.
    Removed { text: String, line_number: usize },
    /// Line identical in both texts at this position.
    Unchanged { text: String, line_number: usize },
}

impl DiffLine {
    /// The raw line text, without any diff prefix.
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Header { text }
            | DiffLine::Added { text, .. }
            | DiffLine::Removed { text, .. }
            | DiffLine::Unchanged { text, .. } => text,
        }
    }

    /// 1-based source position, `None` for synthetic headers.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            DiffLine::Header { .. } => None,
            DiffLine::Added { line_number, .. }
            | DiffLine::Removed { line_number, .. }
            | DiffLine::Unchanged { line_number, .. } => Some(*line_number),
        }
    }

    /// Whether this line represents an actual change.
    pub fn is_change(&self) -> bool {
        matches!(self, DiffLine::Added { .. } | DiffLine::Removed { .. })
    }
}
