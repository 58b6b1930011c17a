//! Text preview of keyboard layouts.
//!
//! Draws the same key grid as the image renderer with Unicode box-drawing
//! characters, for a quick look at a layout in the terminal.

use crate::models::{KeyboardGeometry, KeyboardLayout};
use anyhow::Result;

/// Key cell width in characters, borders included.
const KEY_WIDTH: usize = 5;
/// Key cell height in lines, borders included.
const KEY_HEIGHT: usize = 3;
/// Blank columns between neighbouring keys.
const KEY_GAP: usize = 1;

/// Renders a layout as a box-drawing diagram.
///
/// # Example
///
/// ```text
/// qwerty
/// ┌───┐ ┌───┐ ┌───┐
/// │ q │ │ w │ │ e │
/// └───┘ └───┘ └───┘
/// ```
pub fn render_layout_preview(layout: &KeyboardLayout, geometry: &KeyboardGeometry) -> Result<String> {
    let labels = layout.key_labels(geometry.key_count())?;

    let grid_width = geometry.max_row_len() * (KEY_WIDTH + KEY_GAP) - KEY_GAP;
    let grid_height = geometry.rows.len() * KEY_HEIGHT;
    let mut buffer = vec![vec![' '; grid_width]; grid_height];

    for slot in geometry.slots() {
        render_key_box(
            &mut buffer,
            slot.row * KEY_HEIGHT,
            slot.col * (KEY_WIDTH + KEY_GAP),
            labels[slot.index],
        );
    }

    let mut output = String::new();
    output.push_str(&layout.title);
    output.push('\n');
    for row in &buffer {
        let line: String = row.iter().collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    Ok(output)
}

/// Draws one key box with its label centered on the middle line.
fn render_key_box(buffer: &mut [Vec<char>], row: usize, col: usize, label: char) {
    let right = col + KEY_WIDTH - 1;
    let bottom = row + KEY_HEIGHT - 1;

    buffer[row][col] = '┌';
    buffer[row][right] = '┐';
    buffer[bottom][col] = '└';
    buffer[bottom][right] = '┘';
    for c in col + 1..right {
        buffer[row][c] = '─';
        buffer[bottom][c] = '─';
    }
    for line in buffer.iter_mut().take(bottom).skip(row + 1) {
        line[col] = '│';
        line[right] = '│';
    }

    // Whitespace labels would vanish, show them as a middle dot
    let label = if label.is_whitespace() { '·' } else { label };
    buffer[row + KEY_HEIGHT / 2][col + KEY_WIDTH / 2] = label;
}
