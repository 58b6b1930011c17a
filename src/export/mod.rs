//! Rendering of keyboard layouts and layout statistics.
//!
//! This module turns loaded layouts and statistics into images (keyboard
//! diagrams, grouped bar charts) and text (terminal previews, markdown
//! tables).

pub mod chart;
pub mod font;
pub mod keyboard_image;
pub mod keyboard_text;
pub mod plot_backend;
pub mod raster;
pub mod stats_summary;

pub use chart::{format_ratio_label, render_chart, save_chart};
pub use font::FontHandle;
pub use keyboard_image::{create_keyboard_image, render_layout, save_png, stack_images_vertically};
pub use keyboard_text::render_layout_preview;
pub use stats_summary::generate_stats_summary;
