//! kbplot - keyboard layout diagrams and metric charts
//!
//! Reads the JSON files written by the layout optimizer and renders them:
//! stacked keyboard diagrams, a grouped bar chart of the layout metrics, or a
//! markdown table of the same numbers.

use clap::{Parser, Subcommand};
use kbplot::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use kbplot::cli::{ChartArgs, CliError, CliResult, ConfigArgs, KeyboardsArgs, SummaryArgs};
use kbplot::config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// kbplot - keyboard layout diagrams and metric charts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render keyboard diagrams from a layouts file into one stacked image
    Keyboards(KeyboardsArgs),
    /// Draw a grouped bar chart of the metrics in a statistics file
    Chart(ChartArgs),
    /// Print the metrics in a statistics file as a markdown table
    Summary(SummaryArgs),
    /// Show or create the configuration file
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for previews and tables
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))?,
    };

    if let Commands::Config(args) = &cli.command {
        return args.execute(&config_path);
    }

    let config = Config::load_from(&config_path)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

    match &cli.command {
        Commands::Keyboards(args) => args.execute(&config),
        Commands::Chart(args) => args.execute(&config),
        Commands::Summary(args) => args.execute(&config),
        Commands::Config(args) => args.execute(&config_path),
    }
}
