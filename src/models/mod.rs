//! Data models for layouts, statistics, geometry and colors.
//!
//! Models are independent of file formats and rendering backends.

pub mod keyboard_geometry;
pub mod keyboard_layout;
pub mod rgb;
pub mod stats;

// Re-export all model types
pub use keyboard_geometry::{KeySlot, KeyboardGeometry};
pub use keyboard_layout::KeyboardLayout;
pub use rgb::RgbColor;
pub use stats::{MetricMap, StatsTable};
