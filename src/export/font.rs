//! Font resolution with an explicit fallback policy.
//!
//! Rendering prefers a TrueType font from the configured search paths and
//! falls back to the built-in 8x8 bitmap font when none of them can be read.
//! Both kinds expose the same measure/rasterize interface, so renderers never
//! branch on which one they got.

use anyhow::{Context, Result};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Cell size of the built-in bitmap font.
const BUILTIN_CELL: u32 = 8;

/// Pixel extent of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    /// Advance width in pixels
    pub width: u32,
    /// Line height in pixels
    pub height: u32,
}

/// A font usable by the renderers.
pub enum FontHandle {
    /// A TrueType/OpenType font loaded from disk.
    TrueType {
        /// File the font was loaded from
        path: PathBuf,
        /// Parsed font
        font: Box<fontdue::Font>,
    },
    /// The built-in 8x8 bitmap font, scaled by whole pixels.
    Builtin,
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrueType { path, .. } => f.debug_tuple("TrueType").field(path).finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontHandle {
    /// Picks the first loadable font from `search_paths`, else the built-in font.
    ///
    /// This never fails: an unreadable or unparseable font file only moves the
    /// search on to the next candidate.
    pub fn resolve(search_paths: &[PathBuf]) -> Self {
        for path in search_paths {
            match Self::load_truetype(path) {
                Ok(handle) => {
                    debug!("Using font {}", path.display());
                    return handle;
                }
                Err(e) => debug!("Skipping font candidate: {e:#}"),
            }
        }

        warn!("No TrueType font found, falling back to the built-in bitmap font");
        Self::Builtin
    }

    /// Loads a TrueType font file.
    pub fn load_truetype(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to parse font {}: {e}", path.display()))?;

        Ok(Self::TrueType {
            path: path.to_path_buf(),
            font: Box::new(font),
        })
    }

    /// Measures `text` at `px` pixels.
    #[must_use]
    pub fn measure(&self, text: &str, px: f32) -> TextSize {
        match self {
            Self::TrueType { font, .. } => {
                let mut width = 0.0_f32;
                let mut prev = None;
                for c in text.chars() {
                    if let Some(p) = prev {
                        width += font.horizontal_kern(p, c, px).unwrap_or(0.0);
                    }
                    width += font.metrics(c, px).advance_width;
                    prev = Some(c);
                }
                let (ascent, descent) = line_extent(font, px);
                TextSize {
                    width: width.ceil().max(0.0) as u32,
                    height: (ascent - descent).ceil().max(0.0) as u32,
                }
            }
            Self::Builtin => {
                let cell = BUILTIN_CELL * builtin_scale(px);
                TextSize {
                    width: cell * text.chars().count() as u32,
                    height: cell,
                }
            }
        }
    }

    /// Rasterizes `text` at `px` pixels.
    ///
    /// `plot` receives `(x, y, coverage)` for every touched pixel, with
    /// coordinates relative to the top-left corner of the text box returned
    /// by [`FontHandle::measure`] and coverage in `0.0..=1.0`.
    pub fn rasterize(&self, text: &str, px: f32, mut plot: impl FnMut(i32, i32, f32)) {
        match self {
            Self::TrueType { font, .. } => {
                let (baseline, _) = line_extent(font, px);
                let mut caret = 0.0_f32;
                let mut prev = None;
                for c in text.chars() {
                    if let Some(p) = prev {
                        caret += font.horizontal_kern(p, c, px).unwrap_or(0.0);
                    }
                    let (metrics, bitmap) = font.rasterize(c, px);
                    let left = (caret + metrics.xmin as f32).round() as i32;
                    let top = (baseline - (metrics.ymin + metrics.height as i32) as f32).round() as i32;
                    for row in 0..metrics.height {
                        for col in 0..metrics.width {
                            let coverage = bitmap[row * metrics.width + col];
                            if coverage > 0 {
                                plot(left + col as i32, top + row as i32, f32::from(coverage) / 255.0);
                            }
                        }
                    }
                    caret += metrics.advance_width;
                    prev = Some(c);
                }
            }
            Self::Builtin => {
                let scale = builtin_scale(px) as i32;
                let cell = BUILTIN_CELL as i32 * scale;
                for (i, c) in text.chars().enumerate() {
                    let origin = i as i32 * cell;
                    for (row, bits) in builtin_glyph(c).iter().enumerate() {
                        for bit in 0..8 {
                            if bits & (1 << bit) == 0 {
                                continue;
                            }
                            let x = origin + bit * scale;
                            let y = row as i32 * scale;
                            for dy in 0..scale {
                                for dx in 0..scale {
                                    plot(x + dx, y + dy, 1.0);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Ascent and (negative) descent of a TrueType font at `px`.
fn line_extent(font: &fontdue::Font, px: f32) -> (f32, f32) {
    font.horizontal_line_metrics(px)
        .map_or((px, 0.0), |m| (m.ascent, m.descent))
}

/// Whole-pixel scale factor that brings the 8px bitmap font closest to `px`.
///
/// Halves round up, so 20px (2.5 cells) draws at scale 3.
fn builtin_scale(px: f32) -> u32 {
    ((px / BUILTIN_CELL as f32).round() as u32).max(1)
}

/// Bitmap rows for `c`, with unknown characters drawn as '?'.
fn builtin_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}
