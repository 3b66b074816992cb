//! The engine is positional, not a sequence alignment: an inserted line
//! shifts everything after it and shows up as a cascade of removed/added
//! pairs. These tests pin that behavior down so nobody "fixes" it without
//! noticing the output format change.

use line_diff_core::{diff, DiffLine};

#[test]
fn inserted_line_cascades_changes_for_following_lines() {
    let old = "a\nb\nc";
    let new = "a\nINSERTED\nb\nc";

    let lines = diff(old, new);
    let changes: Vec<&DiffLine> = lines.iter().filter(|l| l.is_change()).collect();

    // Every position after the insertion point differs, plus the trailing
    // added line from the longer new text.
    assert_eq!(changes.len(), 5);
    assert!(matches!(
        changes[0],
        DiffLine::Removed { text, line_number: 2 } if text == "b"
    ));
    assert!(matches!(
        changes[1],
        DiffLine::Added { text, line_number: 2 } if text == "INSERTED"
    ));
    assert!(matches!(
        changes[4],
        DiffLine::Added { text, line_number: 4 } if text == "c"
    ));
}

#[test]
fn trailing_newline_produces_final_empty_line() {
    let lines = diff("a\n", "a");
    assert!(lines.iter().any(|l| matches!(
        l,
        DiffLine::Removed { text, line_number: 2 } if text.is_empty()
    )));
}
