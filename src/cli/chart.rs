//! Metric chart command.

use crate::branding::{DEFAULT_CHART_OUTPUT, DEFAULT_STATS_FILE};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{save_chart, FontHandle};
use crate::parser::load_stats;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Draw a grouped bar chart comparing every metric across layouts
#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    /// Statistics file (name -> metric -> value)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_STATS_FILE)]
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CHART_OUTPUT)]
    pub output: PathBuf,

    /// Override the configured canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the configured canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl ChartArgs {
    /// Execute the chart command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let stats = load_stats(&self.input)
            .map_err(|e| CliError::from_anyhow("Failed to load statistics", &e))?;
        info!("Charting {} layouts from {}", stats.len(), self.input.display());

        let mut chart_config = config.chart.clone();
        if let Some(width) = self.width {
            chart_config.width = width;
        }
        if let Some(height) = self.height {
            chart_config.height = height;
        }
        chart_config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid chart size: {e}")))?;

        let font = FontHandle::resolve(&config.fonts.search_paths);
        save_chart(&stats, &chart_config, &font, &self.output)
            .map_err(|e| CliError::from_anyhow("Failed to render chart", &e))?;

        println!(
            "✓ Wrote chart of {} layouts to {} ({}x{})",
            stats.len(),
            self.output.display(),
            chart_config.width,
            chart_config.height
        );
        Ok(())
    }
}
