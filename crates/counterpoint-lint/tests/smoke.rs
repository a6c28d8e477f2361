//! Smoke test: the engine loads and reports its version.

#[test]
fn exposes_version() {
    assert!(!counterpoint_lint::VERSION.is_empty());
    assert_eq!(counterpoint_lint::VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn clean_passage_has_no_issues() {
    assert!(counterpoint_lint::analyze("E4 D4 C4", "C3 G3 C3", "C major").is_empty());
}
