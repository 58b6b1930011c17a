//! Raster keyboard diagrams.
//!
//! Each layout becomes one image: a white canvas with a centered title and a
//! grid of light-gray rounded keys, every key labelled with its character.
//! Several diagrams are combined by stacking them top to bottom.

use crate::export::font::FontHandle;
use crate::export::raster::{self, Anchor};
use crate::models::keyboard_layout::key_labels;
use crate::models::{KeyboardGeometry, KeyboardLayout, RgbColor};
use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::path::Path;
use tracing::debug;

/// Key fill color (CSS "lightgray").
pub const KEY_FILL: RgbColor = RgbColor::new(211, 211, 211);

/// Renders a single keyboard diagram.
///
/// # Arguments
///
/// * `title` - Text drawn centered above the grid
/// * `layout_string` - One label per key, row-major
/// * `geometry` - Row lengths and pixel measurements
/// * `font` - Font for the title and key labels
///
/// # Errors
///
/// Fails with [`crate::error::SchemaError::LayoutTooShort`] when
/// `layout_string` has fewer characters than the geometry has keys, and
/// when the geometry itself is invalid.
pub fn create_keyboard_image(
    title: &str,
    layout_string: &str,
    geometry: &KeyboardGeometry,
    font: &FontHandle,
) -> Result<RgbImage> {
    geometry.validate()?;
    let labels = key_labels(title, layout_string, geometry.key_count())?;

    let width = geometry.image_width();
    let height = geometry.image_height();
    let mut image = RgbImage::from_pixel(width, height, RgbColor::WHITE.to_pixel());

    // Title
    let title_size = font.measure(title, geometry.title_font_size);
    let title_x = (width as i32 - title_size.width as i32).div_euclid(2);
    let title_y = (geometry.margin / 2) as i32;
    raster::draw_text(
        &mut image,
        font,
        title,
        geometry.title_font_size,
        (title_x, title_y),
        Anchor::TopLeft,
        RgbColor::BLACK,
    );

    let key_w = geometry.key_width as i32;
    let key_h = geometry.key_height as i32;
    for slot in geometry.slots() {
        let (x, y) = (slot.x as i32, slot.y as i32);
        raster::rounded_rect(
            &mut image,
            (x, y),
            (x + key_w, y + key_h),
            geometry.corner_radius as i32,
            KEY_FILL,
            RgbColor::BLACK,
        );

        let label = labels[slot.index].to_string();
        let size = font.measure(&label, geometry.font_size);
        let text_x = x + (key_w - size.width as i32).div_euclid(2);
        let text_y = y + (key_h - size.height as i32).div_euclid(2);
        raster::draw_text(
            &mut image,
            font,
            &label,
            geometry.font_size,
            (text_x, text_y),
            Anchor::TopLeft,
            RgbColor::BLACK,
        );
    }

    debug!("Rendered keyboard '{}' ({}x{})", title, width, height);
    Ok(image)
}

/// Renders the diagram of a loaded layout.
pub fn render_layout(
    layout: &KeyboardLayout,
    geometry: &KeyboardGeometry,
    font: &FontHandle,
) -> Result<RgbImage> {
    create_keyboard_image(&layout.title, &layout.keys, geometry, font)
        .with_context(|| format!("Failed to render layout '{}'", layout.name))
}

/// Stacks images top to bottom into one image.
///
/// The result is as wide as the widest input and as tall as all inputs
/// together. Every image is left-aligned; the area right of narrower images
/// stays black.
pub fn stack_images_vertically(images: Vec<RgbImage>) -> Result<RgbImage> {
    if images.is_empty() {
        anyhow::bail!("Cannot stack an empty list of images");
    }

    let width = images.iter().map(RgbImage::width).max().unwrap_or(0);
    let height = images.iter().map(RgbImage::height).sum();
    let mut stacked = RgbImage::new(width, height);

    let mut y_offset = 0_i64;
    for part in images {
        image::imageops::replace(&mut stacked, &part, 0, y_offset);
        y_offset += i64::from(part.height());
    }

    Ok(stacked)
}

/// Writes an image as PNG regardless of the file extension.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image to {}", path.display()))
}
