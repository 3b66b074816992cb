use line_diff_core::{diff, format_json, format_summary, format_text};
use pretty_assertions::assert_eq;

#[test]
fn text_format_matches_export_layout() {
    let lines = diff("a\nb\nc", "a\nx\nc");
    let text = format_text(&lines);

    assert_eq!(
        text,
        "--- old-config\n+++ new-config\n  a\n-b\n+x\n  c"
    );
}

#[test]
fn text_format_of_empty_diff_is_headers_only() {
    let lines = diff("", "");
    assert_eq!(format_text(&lines), "--- old-config\n+++ new-config");
}

#[test]
fn summary_counts_each_kind() {
    let lines = diff("a\nb\nc", "a\nx\nc");
    assert_eq!(format_summary(&lines), "added=1 removed=1 unchanged=2");
}

#[test]
fn json_format_tags_lines_by_kind() {
    let lines = diff("a", "b");
    let json = format_json(&lines);

    assert!(json.contains("\"kind\": \"header\""));
    assert!(json.contains("\"kind\": \"removed\""));
    assert!(json.contains("\"kind\": \"added\""));
    assert!(json.contains("\"line_number\": 1"));
}
