//! Parsing of the JSON files written by the layout optimizer.

pub mod stats_json;

// Re-export commonly used functions
pub use stats_json::{load_layouts, load_stats, select_layouts, strip_legacy_prefix};
