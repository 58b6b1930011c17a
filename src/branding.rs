//! Application identity: names, paths and default file names.
//!
//! This module centralizes the strings that show up in help text, config
//! paths and output file names.

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "kbplot";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Render keyboard layout diagrams and metric charts from optimizer output";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "kbplot";

/// Environment variable that replaces the platform config directory.
pub const CONFIG_DIR_ENV: &str = "KBPLOT_CONFIG_DIR";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default input of the `keyboards` command.
pub const DEFAULT_LAYOUTS_FILE: &str = "layouts.json";

/// Default input of the `chart` and `summary` commands.
pub const DEFAULT_STATS_FILE: &str = "stats.json";

/// Default output of the `keyboards` command.
pub const DEFAULT_KEYBOARDS_OUTPUT: &str = "combined.png";

/// Default output of the `chart` command.
pub const DEFAULT_CHART_OUTPUT: &str = "chart.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains('/'));
        assert!(CONFIG_FILE_NAME.ends_with(".toml"));
        for output in [DEFAULT_KEYBOARDS_OUTPUT, DEFAULT_CHART_OUTPUT] {
            assert!(output.ends_with(".png"));
        }
    }
}
