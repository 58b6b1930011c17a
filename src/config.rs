//! Configuration management for the renderers.
//!
//! This module handles loading, validating, and saving render configuration
//! in TOML format with platform-specific directory resolution.

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV, CONFIG_FILE_NAME};
use crate::models::{KeyboardGeometry, RgbColor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Chart canvas, layout and theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Bar width in category units; also the offset between series
    pub bar_width: f64,
    /// Figure and plot background
    pub background: RgbColor,
    /// Text, spines and ticks
    pub foreground: RgbColor,
    /// Chart title
    pub title: String,
    /// X axis title
    pub x_label: String,
    /// Y axis title
    pub y_label: String,
    /// Chart title size in pixels
    pub title_font_size: f32,
    /// Axis title size in pixels
    pub label_font_size: f32,
    /// Tick label size in pixels
    pub tick_font_size: f32,
    /// Bar annotation size in pixels
    pub annotation_font_size: f32,
    /// Legend entry size in pixels
    pub legend_font_size: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 800,
            bar_width: 0.15,
            background: RgbColor::new(0x2e, 0x34, 0x40),
            foreground: RgbColor::new(0xd8, 0xde, 0xe9),
            title: "Metric Comparison".to_string(),
            x_label: "Layout".to_string(),
            y_label: "Percentage".to_string(),
            title_font_size: 17.0,
            label_font_size: 14.0,
            tick_font_size: 14.0,
            annotation_font_size: 12.5,
            legend_font_size: 14.0,
        }
    }
}

impl ChartConfig {
    /// Smallest canvas edge the layout code can fit a plot into.
    pub const MIN_CANVAS: u32 = 200;
    /// Largest canvas edge, keeps the pixel buffer allocation bounded.
    pub const MAX_CANVAS: u32 = 16_384;

    /// Checks canvas size, bar width and font sizes.
    pub fn validate(&self) -> Result<()> {
        if self.width < Self::MIN_CANVAS || self.height < Self::MIN_CANVAS {
            anyhow::bail!(
                "Chart canvas {}x{} is too small, both sides must be at least {}",
                self.width,
                self.height,
                Self::MIN_CANVAS
            );
        }
        if self.width > Self::MAX_CANVAS || self.height > Self::MAX_CANVAS {
            anyhow::bail!(
                "Chart canvas {}x{} is too large, both sides must be at most {}",
                self.width,
                self.height,
                Self::MAX_CANVAS
            );
        }
        if !(self.bar_width.is_finite() && self.bar_width > 0.0) {
            anyhow::bail!("Chart bar_width must be a positive number, got {}", self.bar_width);
        }
        let sizes = [
            ("title_font_size", self.title_font_size),
            ("label_font_size", self.label_font_size),
            ("tick_font_size", self.tick_font_size),
            ("annotation_font_size", self.annotation_font_size),
            ("legend_font_size", self.legend_font_size),
        ];
        for (name, size) in sizes {
            if !(size.is_finite() && size > 0.0) {
                anyhow::bail!("Chart {name} must be a positive number, got {size}");
            }
        }
        Ok(())
    }
}

/// Font lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType candidates, tried in order before the built-in bitmap font
    pub search_paths: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        let search_paths = [
            "arial.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        Self {
            search_paths: search_paths.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Render configuration.
///
/// # File Location
///
/// - Linux: `~/.config/kbplot/config.toml`
/// - macOS: `~/Library/Application Support/kbplot/config.toml`
/// - Windows: `%APPDATA%\kbplot\config.toml`
///
/// Every section and field is optional in the file; missing ones take their
/// defaults, which reproduce the stock 690x250 keyboard and 1600x800 chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Keyboard diagram geometry
    pub keyboard: KeyboardGeometry,
    /// Chart settings
    pub chart: ChartConfig,
    /// Font lookup
    pub fonts: FontConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `KBPLOT_CONFIG_DIR` takes precedence over the platform directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from `path`, or defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = self.to_toml()?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp config file: {}", temp_path.display()))?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - keyboard geometry has at least one non-empty row and non-zero key size
    /// - chart canvas, bar width and font sizes are usable
    pub fn validate(&self) -> Result<()> {
        self.keyboard.validate()?;
        self.chart.validate()?;
        Ok(())
    }
}
