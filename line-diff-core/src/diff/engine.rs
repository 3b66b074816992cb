use crate::diff::result::DiffLine;

/// Header emitted for the old (left) side of every diff.
pub const OLD_HEADER: &str = "--- old-config";
/// Header emitted for the new (right) side of every diff.
pub const NEW_HEADER: &str = "+++ new-config";

/// Configures line diff behavior.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Line prefixes to treat as always-equal. A position where either
    /// side starts with one of these prefixes is reported as unchanged.
    /// Used to mute volatile or secret-bearing config lines.
    pub ignore_prefixes: Vec<String>,
}

/// Diff two configuration texts with default options.
///
/// This is a positional, index-aligned diff: line `i` of the old text is
/// compared against line `i` of the new text. An insertion or deletion
/// shifts every following line, which shows up as a run of removed/added
/// pairs after the shift point. That matches the export format consumers
/// expect; a minimal diff would need a sequence-alignment algorithm and
/// different output semantics.
///
/// The two synthetic headers are always emitted first, even for two empty
/// inputs. A trailing newline yields a final empty line on that side.
pub fn diff(old: &str, new: &str) -> Vec<DiffLine> {
    diff_with_options(old, new, &DiffOptions::default())
}

/// Diff two configuration texts with custom options.
pub fn diff_with_options(old: &str, new: &str, opts: &DiffOptions) -> Vec<DiffLine> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    let mut out = Vec::with_capacity(old_lines.len().max(new_lines.len()) + 2);
    out.push(DiffLine::Header {
        text: OLD_HEADER.to_string(),
    });
    out.push(DiffLine::Header {
        text: NEW_HEADER.to_string(),
    });

    let max = old_lines.len().max(new_lines.len());
    for i in 0..max {
        let left = old_lines.get(i).copied();
        let right = new_lines.get(i).copied();

        if is_ignored(left, opts) || is_ignored(right, opts) {
            if let Some(text) = left.or(right) {
                out.push(DiffLine::Unchanged {
                    text: text.to_string(),
                    line_number: i + 1,
                });
            }
            continue;
        }

        match (left, right) {
            (Some(l), Some(r)) if l == r => out.push(DiffLine::Unchanged {
                text: l.to_string(),
                line_number: i + 1,
            }),
            (left, right) => {
                if let Some(l) = left {
                    out.push(DiffLine::Removed {
                        text: l.to_string(),
                        line_number: i + 1,
                    });
                }
                if let Some(r) = right {
                    out.push(DiffLine::Added {
                        text: r.to_string(),
                        line_number: i + 1,
                    });
                }
            }
        }
    }

    out
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

fn is_ignored(line: Option<&str>, opts: &DiffOptions) -> bool {
    let Some(line) = line else {
        return false;
    };
    opts.ignore_prefixes
        .iter()
        .any(|prefix| line.starts_with(prefix.as_str()))
}
