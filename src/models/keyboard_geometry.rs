//! Grid geometry for rendered keyboard diagrams.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single key slot on the rendered grid.
///
/// Coordinates are pixel offsets of the key's top-left corner on the
/// keyboard image. `index` is the row-major position of the key, which is
/// also the index of its label in the layout string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    /// Row-major key index (0-based)
    pub index: usize,
    /// Grid row (0-based)
    pub row: usize,
    /// Column within the row (0-based)
    pub col: usize,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
}

/// Row layout and pixel measurements of a keyboard diagram.
///
/// The defaults describe the 3-row 10/11/10 board used by the layout
/// optimizer: 50px keys, 10px spacing and a 40px title band, which yields
/// a 690×250 image.
///
/// # Validation
///
/// - `rows` must be non-empty and every row must hold at least one key
/// - key width and height must be non-zero
/// - font sizes must be positive
/// - the resulting image must fit in [`KeyboardGeometry::MAX_IMAGE_SIDE`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardGeometry {
    /// Number of keys in each row, top to bottom
    pub rows: Vec<usize>,
    /// Key width in pixels
    pub key_width: u32,
    /// Key height in pixels
    pub key_height: u32,
    /// Gap between neighbouring keys in pixels
    pub spacing: u32,
    /// Corner radius of the key rectangles
    pub corner_radius: u32,
    /// Outer margin around the grid
    pub margin: u32,
    /// Key label font size in pixels
    pub font_size: f32,
    /// Title font size in pixels
    pub title_font_size: f32,
    /// Height of the band reserved for the title above the grid
    pub title_height: u32,
}

impl Default for KeyboardGeometry {
    fn default() -> Self {
        Self {
            rows: vec![10, 11, 10],
            key_width: 50,
            key_height: 50,
            spacing: 10,
            corner_radius: 10,
            margin: 20,
            font_size: 20.0,
            title_font_size: 24.0,
            title_height: 40,
        }
    }
}

impl KeyboardGeometry {
    /// Largest width or height of a single diagram, in pixels.
    pub const MAX_IMAGE_SIDE: u64 = 16_384;

    /// Total number of keys across all rows.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.rows.iter().sum()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().copied().max().unwrap_or(0)
    }

    /// Image width in pixels, sized to the longest row.
    #[must_use]
    pub fn image_width(&self) -> u32 {
        let cols = self.max_row_len() as u32;
        (self.key_width + self.spacing) * cols - self.spacing + 2 * self.margin
    }

    /// Image height in pixels, including the title band.
    #[must_use]
    pub fn image_height(&self) -> u32 {
        let rows = self.rows.len() as u32;
        (self.key_height + self.spacing) * rows - self.spacing
            + 2 * self.margin
            + self.title_height
    }

    /// Iterates over every key slot in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = KeySlot> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, &len)| (0..len).map(move |col| (row, col)))
            .enumerate()
            .map(|(index, (row, col))| KeySlot {
                index,
                row,
                col,
                x: self.margin + col as u32 * (self.key_width + self.spacing),
                y: self.margin + row as u32 * (self.key_height + self.spacing) + self.title_height,
            })
    }

    /// Validates the geometry values.
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            anyhow::bail!("Keyboard geometry needs at least one row");
        }
        if let Some(row) = self.rows.iter().position(|&len| len == 0) {
            anyhow::bail!("Keyboard geometry row {row} has no keys");
        }
        if self.key_width == 0 || self.key_height == 0 {
            anyhow::bail!(
                "Key size must be non-zero (got {}x{})",
                self.key_width,
                self.key_height
            );
        }
        if !(self.font_size > 0.0 && self.title_font_size > 0.0) {
            anyhow::bail!("Font sizes must be positive");
        }

        // Computed wide so oversized values are reported instead of overflowing
        let pitch_x = u64::from(self.key_width) + u64::from(self.spacing);
        let pitch_y = u64::from(self.key_height) + u64::from(self.spacing);
        let frame = 2 * u64::from(self.margin);
        let width = (u128::from(pitch_x) * self.max_row_len() as u128)
            .saturating_add(u128::from(frame))
            .saturating_sub(u128::from(self.spacing));
        let height = (u128::from(pitch_y) * self.rows.len() as u128)
            .saturating_add(u128::from(frame) + u128::from(self.title_height))
            .saturating_sub(u128::from(self.spacing));
        let max = u128::from(Self::MAX_IMAGE_SIDE);
        if width > max || height > max {
            anyhow::bail!(
                "Keyboard image {width}x{height} is too large, both sides must be at most {max}"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let geometry = KeyboardGeometry::default();
        assert_eq!(geometry.key_count(), 31);
        assert_eq!(geometry.max_row_len(), 11);
        assert_eq!(geometry.image_width(), 690);
        assert_eq!(geometry.image_height(), 250);
    }

    #[test]
    fn test_slots_row_major() {
        let geometry = KeyboardGeometry::default();
        let slots: Vec<KeySlot> = geometry.slots().collect();
        assert_eq!(slots.len(), 31);

        assert_eq!(slots[0], KeySlot { index: 0, row: 0, col: 0, x: 20, y: 60 });
        // First key of the 11-wide middle row
        assert_eq!(slots[10], KeySlot { index: 10, row: 1, col: 0, x: 20, y: 120 });
        // Last key of the middle row sits in the eleventh column
        assert_eq!(slots[20].col, 10);
        assert_eq!(slots[20].x, 20 + 10 * 60);
        assert_eq!(slots[30], KeySlot { index: 30, row: 2, col: 9, x: 560, y: 180 });
    }

    #[test]
    fn test_custom_rows() {
        let geometry = KeyboardGeometry {
            rows: vec![3, 3],
            ..KeyboardGeometry::default()
        };
        assert_eq!(geometry.key_count(), 6);
        assert_eq!(geometry.image_width(), 60 * 3 - 10 + 40);
        assert_eq!(geometry.image_height(), 60 * 2 - 10 + 40 + 40);
    }

    #[test]
    fn test_validate() {
        assert!(KeyboardGeometry::default().validate().is_ok());

        let empty = KeyboardGeometry {
            rows: vec![],
            ..KeyboardGeometry::default()
        };
        assert!(empty.validate().is_err());

        let zero_row = KeyboardGeometry {
            rows: vec![10, 0],
            ..KeyboardGeometry::default()
        };
        assert!(zero_row.validate().is_err());

        let zero_key = KeyboardGeometry {
            key_width: 0,
            ..KeyboardGeometry::default()
        };
        assert!(zero_key.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_images() {
        let wide = KeyboardGeometry {
            key_width: u32::MAX,
            spacing: u32::MAX,
            ..KeyboardGeometry::default()
        };
        let err = wide.validate().unwrap_err();
        assert!(err.to_string().contains("too large"));

        let tall = KeyboardGeometry {
            rows: vec![1; 1_000],
            ..KeyboardGeometry::default()
        };
        assert!(tall.validate().is_err());

        let huge_margin = KeyboardGeometry {
            margin: u32::MAX,
            title_height: u32::MAX,
            ..KeyboardGeometry::default()
        };
        assert!(huge_margin.validate().is_err());

        // Largest accepted size still validates
        let limit = KeyboardGeometry {
            rows: vec![1],
            key_width: 16_384 - 40,
            ..KeyboardGeometry::default()
        };
        assert!(limit.validate().is_ok());
        assert_eq!(u64::from(limit.image_width()), KeyboardGeometry::MAX_IMAGE_SIDE);
    }
}
