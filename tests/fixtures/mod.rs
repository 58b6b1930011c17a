//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// The 31-key QWERTY layout string for the 10/11/10 board.
pub const QWERTY: &str = "qwertyuiopasdfghjkl;'zxcvbnm,./";

/// A rearranged 31-key layout.
pub const OPTIMIZED_SFB: &str = "flhdmvwou,srntkgyaei/xjbzqpc';.";

/// A second rearranged 31-key layout.
pub const OPTIMIZED_ROLL: &str = "bldcvjfou,nrtsgypheaizqxmkw';./";

/// Path to the kbplot binary
pub fn kbplot_bin() -> &'static str {
    env!("CARGO_BIN_EXE_kbplot")
}

/// Creates a Command with an isolated config directory.
///
/// The directory is usually a test's own [`TempDir`], so no test reads or
/// writes the user's real configuration.
pub fn kbplot_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(kbplot_bin());
    cmd.env("KBPLOT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs kbplot with an isolated config directory inside `dir`.
pub fn run_kbplot(args: &[&str], dir: &TempDir) -> Output {
    kbplot_command(args, &dir.path().join("config"))
        .output()
        .expect("Failed to execute command")
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Layouts file mixing both entry shapes and the legacy "000 " prefix.
///
/// With the default "optimized" prefix, two layouts are selected.
pub fn layouts_json() -> String {
    serde_json::json!({
        "qwerty": ["QWERTY", QWERTY],
        "000 optimized sfb": OPTIMIZED_SFB,
        "optimized roll": ["Min Roll", OPTIMIZED_ROLL],
    })
    .to_string()
}

/// Statistics file for three configurations with three metrics.
pub fn stats_json() -> String {
    serde_json::json!({
        "qwerty": {"sfb": 6.4, "roll": 40.0, "alternate": 30.0},
        "000 optimized sfb": {"sfb": 0.9, "roll": 44.0, "alternate": 36.2},
        "optimized roll": {"sfb": 1.2, "roll": 47.5, "alternate": 33.1},
    })
    .to_string()
}

/// Path argument as `&str`.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Stdout of a finished command.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished command.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Width and height of a PNG on disk.
pub fn png_dimensions(path: &Path) -> (u32, u32) {
    let image = image::open(path).expect("Output should be a readable image");
    (image.width(), image.height())
}
