//! Statistics summary command.

use crate::branding::DEFAULT_STATS_FILE;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::generate_stats_summary;
use crate::parser::load_stats;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Print the statistics as a markdown table
#[derive(Debug, Clone, Args)]
pub struct SummaryArgs {
    /// Statistics file (name -> metric -> value)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_STATS_FILE)]
    pub input: PathBuf,

    /// Write the table to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SummaryArgs {
    /// Execute the summary command
    pub fn execute(&self, _config: &Config) -> CliResult<()> {
        let stats = load_stats(&self.input)
            .map_err(|e| CliError::from_anyhow("Failed to load statistics", &e))?;

        let summary = generate_stats_summary(&stats)
            .map_err(|e| CliError::from_anyhow("Failed to summarize statistics", &e))?;

        match &self.output {
            Some(path) => {
                fs::write(path, &summary).map_err(|e| {
                    CliError::io(format!("Failed to write summary to {}: {e}", path.display()))
                })?;
                println!("✓ Wrote summary of {} layouts to {}", stats.len(), path.display());
            }
            None => print!("{summary}"),
        }

        Ok(())
    }
}
