//! kbplot library
//!
//! This library provides the loaders and renderers behind the `kbplot`
//! binary: reading optimizer statistics and layouts, drawing keyboard
//! diagrams and metric charts, and the CLI command handlers.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
