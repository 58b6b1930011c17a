//! CLI command handlers for kbplot.
//!
//! Every subcommand is an `Args` struct with an `execute` method that reports
//! failures as a [`CliError`] carrying the process exit code.

pub mod chart;
pub mod common;
pub mod config;
pub mod keyboards;
pub mod summary;

// Re-export types used by main.rs and tests
pub use chart::ChartArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use keyboards::KeyboardsArgs;
pub use summary::SummaryArgs;
