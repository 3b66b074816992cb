//! Terminal rendering for diff output.

use colored::Colorize;
use line_diff_core::{format_summary, format_text, DiffLine, NEW_HEADER, OLD_HEADER};

/// Render diff lines for terminal output. Headers stay uncolored; the
/// `+++ new-config` header is checked before the `+`/`-` change markers
/// so it is not painted green.
pub fn render_text(lines: &[DiffLine]) -> String {
    let raw = format_text(lines);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line == OLD_HEADER || line == NEW_HEADER {
            line.cyan().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(lines: &[DiffLine]) -> String {
    format_summary(lines).cyan().to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_summary, render_text};
    use line_diff_core::diff;

    #[test]
    fn renders_every_diff_line() {
        colored::control::set_override(false);

        let lines = diff("a\nb", "a\nc");
        let rendered = render_text(&lines);
        assert_eq!(
            rendered,
            "--- old-config\n+++ new-config\n  a\n-b\n+c"
        );
    }

    #[test]
    fn summary_counts_match_diff() {
        colored::control::set_override(false);

        let lines = diff("a\nb", "a\nc");
        assert_eq!(render_summary(&lines), "added=1 removed=1 unchanged=1");
    }
}
