//! End-to-end tests for `kbplot summary`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_summary_prints_markdown_table() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "stats.json",
        r#"{"qwerty": {"sfb": 6.4, "alternate": 30}, "000 optimized": {"sfb": 0.9, "alternate": 36.25}}"#,
    );

    let output = run_kbplot(&["summary", "--input", arg(&input)], &dir);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Summary should succeed. stderr: {}",
        stderr(&output)
    );
    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "| Layout | alternate | sfb |");
    assert_eq!(lines[1], "|---|---:|---:|");
    assert_eq!(lines[2], "| qwerty | 30.00 | 6.40 |");
    // Legacy prefix stripped
    assert_eq!(lines[3], "| optimized | 36.25 | 0.90 |");
}

#[test]
fn test_summary_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "stats.json", &stats_json());
    let output_path = dir.path().join("summary.md");

    let output = run_kbplot(
        &["summary", "--input", arg(&input), "--output", arg(&output_path)],
        &dir,
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("✓ Wrote summary of 3 layouts"));

    let written = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "| Layout | alternate | roll | sfb | A+R+-S |");
    assert_eq!(lines[2], "| qwerty | 30.00 | 40.00 | 6.40 | 63.60 |");
    assert_eq!(lines.len(), 2 + 3);
}

#[test]
fn test_summary_missing_metric() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "stats.json",
        r#"{"qwerty": {"sfb": 6.4, "roll": 40.0}, "colemak": {"sfb": 1.0}}"#,
    );

    let output = run_kbplot(&["summary", "--input", arg(&input)], &dir);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "No partial table on failure");
}

#[test]
fn test_summary_missing_input() {
    let dir = TempDir::new().unwrap();
    let output = run_kbplot(&["summary", "--input", arg(&dir.path().join("x.json"))], &dir);
    assert_eq!(output.status.code(), Some(2));
}
