//! Keyboard diagram command.

use crate::branding::{DEFAULT_KEYBOARDS_OUTPUT, DEFAULT_LAYOUTS_FILE};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::error::SchemaError;
use crate::export::{render_layout, render_layout_preview, save_png, stack_images_vertically, FontHandle};
use crate::parser::{load_layouts, select_layouts};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Render every selected layout and stack the diagrams into one image
#[derive(Debug, Clone, Args)]
pub struct KeyboardsArgs {
    /// Layouts file (name -> layout string or [title, layout string])
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_LAYOUTS_FILE)]
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_KEYBOARDS_OUTPUT)]
    pub output: PathBuf,

    /// Only render layouts whose name starts with this prefix
    #[arg(long, default_value = "optimized")]
    pub prefix: String,

    /// Also print a box-drawing preview of each layout
    #[arg(long)]
    pub preview: bool,
}

impl KeyboardsArgs {
    /// Execute the keyboards command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let layouts = load_layouts(&self.input)
            .map_err(|e| CliError::from_anyhow("Failed to load layouts", &e))?;

        let selected = select_layouts(layouts, &self.prefix);
        if selected.is_empty() {
            return Err(CliError::validation(
                SchemaError::NoMatchingLayouts {
                    prefix: self.prefix.clone(),
                }
                .to_string(),
            ));
        }
        info!("Rendering {} layouts from {}", selected.len(), self.input.display());

        let geometry = &config.keyboard;
        let font = FontHandle::resolve(&config.fonts.search_paths);

        let mut images = Vec::with_capacity(selected.len());
        for layout in &selected {
            if self.preview {
                let preview = render_layout_preview(layout, geometry)
                    .map_err(|e| CliError::from_anyhow("Failed to preview layout", &e))?;
                println!("{preview}");
            }
            let image = render_layout(layout, geometry, &font)
                .map_err(|e| CliError::from_anyhow("Failed to render keyboards", &e))?;
            images.push(image);
        }

        let combined = stack_images_vertically(images)
            .map_err(|e| CliError::from_anyhow("Failed to combine keyboards", &e))?;
        save_png(&combined, &self.output)
            .map_err(|e| CliError::from_anyhow("Failed to save keyboards", &e))?;

        println!(
            "✓ Wrote {} keyboards to {} ({}x{})",
            selected.len(),
            self.output.display(),
            combined.width(),
            combined.height()
        );
        Ok(())
    }
}
