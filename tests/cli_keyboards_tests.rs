//! End-to-end tests for `kbplot keyboards`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_keyboards_renders_selected_layouts() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "layouts.json", &layouts_json());
    let output_path = dir.path().join("combined.png");

    let output = run_kbplot(
        &["keyboards", "--input", arg(&input), "--output", arg(&output_path)],
        &dir,
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "Keyboards should succeed. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("✓ Wrote 2 keyboards"));
    // Two 690x250 diagrams stacked
    assert_eq!(png_dimensions(&output_path), (690, 500));
}

#[test]
fn test_keyboards_prefix_selects_other_layouts() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "layouts.json", &layouts_json());
    let output_path = dir.path().join("qwerty.png");

    let output = run_kbplot(
        &[
            "keyboards",
            "--input",
            arg(&input),
            "--output",
            arg(&output_path),
            "--prefix",
            "qwerty",
        ],
        &dir,
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(png_dimensions(&output_path), (690, 250));
}

#[test]
fn test_keyboards_legacy_prefix_is_stripped_before_selection() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "layouts.json",
        &serde_json::json!({ "000 optimized": QWERTY }).to_string(),
    );
    let output_path = dir.path().join("out.png");

    let output = run_kbplot(
        &["keyboards", "--input", arg(&input), "--output", arg(&output_path)],
        &dir,
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(png_dimensions(&output_path), (690, 250));
}

#[test]
fn test_keyboards_preview_prints_every_key() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "layouts.json", &layouts_json());
    let output_path = dir.path().join("combined.png");

    let output = run_kbplot(
        &[
            "keyboards",
            "--input",
            arg(&input),
            "--output",
            arg(&output_path),
            "--preview",
        ],
        &dir,
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Min Roll"));
    assert!(stdout.contains("optimized sfb"));
    assert!(stdout.contains("┌───┐"));
    for c in OPTIMIZED_ROLL.chars() {
        assert!(stdout.contains(c), "preview is missing key {c}");
    }
    assert!(output_path.exists());
}

#[test]
fn test_keyboards_custom_geometry_from_config() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "layouts.json",
        &serde_json::json!({ "optimized mini": ["Mini", "abcde"] }).to_string(),
    );
    let config = write_file(&dir, "kbplot.toml", "[keyboard]\nrows = [2, 3]\n");
    let output_path = dir.path().join("mini.png");

    let output = run_kbplot(
        &[
            "--config",
            arg(&config),
            "keyboards",
            "--input",
            arg(&input),
            "--output",
            arg(&output_path),
        ],
        &dir,
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(png_dimensions(&output_path), (60 * 3 - 10 + 40, 60 * 2 - 10 + 80));
}

// ============================================================================
// Error Exit Codes
// ============================================================================

#[test]
fn test_keyboards_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let output = run_kbplot(&["keyboards", "--input", arg(&missing)], &dir);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nope.json"));
}

#[test]
fn test_keyboards_malformed_json() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "layouts.json", "[1, 2, 3]");

    let output = run_kbplot(&["keyboards", "--input", arg(&input)], &dir);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("expected a JSON object"));
}

#[test]
fn test_keyboards_short_layout_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "layouts.json",
        &serde_json::json!({ "optimized short": ["Short", "abc"] }).to_string(),
    );
    let output_path = dir.path().join("combined.png");

    let output = run_kbplot(
        &["keyboards", "--input", arg(&input), "--output", arg(&output_path)],
        &dir,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("has 3 keys but the keyboard needs 31"));
    assert!(!output_path.exists(), "No partial output on failure");
}

#[test]
fn test_keyboards_no_matching_layouts() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "layouts.json", &layouts_json());

    let output = run_kbplot(
        &["keyboards", "--input", arg(&input), "--prefix", "dvorak"],
        &dir,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no layouts start with 'dvorak'"));
}

#[test]
fn test_keyboards_invalid_config_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "layouts.json", &layouts_json());
    let config = write_file(&dir, "bad.toml", "[keyboard]\nrows = []\n");

    let output = run_kbplot(
        &["--config", arg(&config), "keyboards", "--input", arg(&input)],
        &dir,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
