use crate::diff::result::DiffLine;

/// Format diff lines as unified-diff-like plain text.
///
/// Headers are emitted verbatim, added lines get a `+` prefix, removed
/// lines a `-` prefix, and unchanged lines a two-space indent. This is the
/// exact format consumed by the copy/export affordance.
pub fn format_text(lines: &[DiffLine]) -> String {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        match line {
            DiffLine::Header { text } => out.push(text.clone()),
            DiffLine::Added { text, .. } => out.push(format!("+{text}")),
            DiffLine::Removed { text, .. } => out.push(format!("-{text}")),
            DiffLine::Unchanged { text, .. } => out.push(format!("  {text}")),
        }
    }
    out.join("\n")
}

/// Format a simple summary of diff counts.
pub fn format_summary(lines: &[DiffLine]) -> String {
    let mut added = 0;
    let mut removed = 0;
    let mut unchanged = 0;

    for line in lines {
        match line {
            DiffLine::Added { .. } => added += 1,
            DiffLine::Removed { .. } => removed += 1,
            DiffLine::Unchanged { .. } => unchanged += 1,
            DiffLine::Header { .. } => {}
        }
    }

    format!("added={added} removed={removed} unchanged={unchanged}")
}
