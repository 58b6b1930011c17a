//! Pixel-level drawing helpers shared by the image renderers.

use crate::export::font::FontHandle;
use crate::models::RgbColor;
use image::RgbImage;

/// Where a text box sits relative to the point it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The point is the top-left corner of the text box.
    TopLeft,
    /// The point is the middle of the text box's right edge.
    RightCenter,
}

/// Blends `color` into the pixel at (x, y) with the given coverage.
///
/// Out-of-bounds coordinates are ignored.
pub fn blend(canvas: &mut RgbImage, x: i32, y: i32, color: RgbColor, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    let current = RgbColor::new(pixel[0], pixel[1], pixel[2]);
    *pixel = current.lerp(color, coverage).to_pixel();
}

/// Draws a filled rounded rectangle with a 1px outline.
///
/// Corners are inclusive: the shape covers `x0..=x1` × `y0..=y1`.
pub fn rounded_rect(
    canvas: &mut RgbImage,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    radius: i32,
    fill: RgbColor,
    outline: RgbColor,
) {
    let radius = radius.min((x1 - x0) / 2).min((y1 - y0) / 2).max(0);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let edge = (x - x0).min(x1 - x).min(y - y0).min(y1 - y) as f32;
            let in_corner = (x < x0 + radius || x > x1 - radius)
                && (y < y0 + radius || y > y1 - radius);

            let edge = if in_corner {
                let cx = x.clamp(x0 + radius, x1 - radius);
                let cy = y.clamp(y0 + radius, y1 - radius);
                let dist = (((x - cx).pow(2) + (y - cy).pow(2)) as f32).sqrt();
                radius as f32 - dist
            } else {
                edge
            };

            if edge < -0.5 {
                continue;
            }
            let color = if edge < 0.5 { outline } else { fill };
            blend(canvas, x, y, color, 1.0);
        }
    }
}

/// Top-left corner of a `width`×`height` box placed at `(x, y)` by `anchor`.
fn anchored_origin(anchor: Anchor, (x, y): (i32, i32), width: u32, height: u32) -> (i32, i32) {
    let (w, h) = (width as i32, height as i32);
    match anchor {
        Anchor::TopLeft => (x, y),
        Anchor::RightCenter => (x - w, y - h / 2),
    }
}

/// Draws `text` at `pos`, positioned by `anchor`.
pub fn draw_text(
    canvas: &mut RgbImage,
    font: &FontHandle,
    text: &str,
    px: f32,
    pos: (i32, i32),
    anchor: Anchor,
    color: RgbColor,
) {
    let size = font.measure(text, px);
    let (ox, oy) = anchored_origin(anchor, pos, size.width, size.height);
    font.rasterize(text, px, |x, y, coverage| {
        blend(canvas, ox + x, oy + y, color, coverage);
    });
}

/// Draws `text` rotated counter-clockwise by `degrees` around its anchor point.
///
/// The text is rasterized into a coverage buffer first and then
/// inverse-mapped onto the canvas with bilinear sampling.
pub fn draw_text_rotated(
    canvas: &mut RgbImage,
    font: &FontHandle,
    text: &str,
    px: f32,
    pos: (i32, i32),
    anchor: Anchor,
    degrees: f32,
    color: RgbColor,
) {
    let size = font.measure(text, px);
    if size.width == 0 || size.height == 0 {
        return;
    }
    let (w, h) = (size.width as usize, size.height as usize);
    let mut coverage = vec![0.0_f32; w * h];
    font.rasterize(text, px, |x, y, c| {
        if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
            let cell = &mut coverage[y as usize * w + x as usize];
            *cell = cell.max(c);
        }
    });

    // Anchor point inside the text box
    let (ox, oy) = anchored_origin(anchor, (0, 0), size.width, size.height);
    let (ax, ay) = (-ox as f32, -oy as f32);

    let (sin, cos) = degrees.to_radians().sin_cos();
    let to_canvas = |tx: f32, ty: f32| {
        let (dx, dy) = (tx - ax, ty - ay);
        (dx * cos + dy * sin, -dx * sin + dy * cos)
    };

    let corners = [
        to_canvas(0.0, 0.0),
        to_canvas(w as f32, 0.0),
        to_canvas(0.0, h as f32),
        to_canvas(w as f32, h as f32),
    ];
    let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min).floor() as i32;
    let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;
    let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min).floor() as i32;
    let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

    let sample = |x: i32, y: i32| -> f32 {
        if x < 0 || y < 0 || x as usize >= w || y as usize >= h {
            0.0
        } else {
            coverage[y as usize * w + x as usize]
        }
    };

    for cy in min_y..=max_y {
        for cx in min_x..=max_x {
            // Pixel centre back into text space
            let (dx, dy) = (cx as f32 + 0.5, cy as f32 + 0.5);
            let tx = dx * cos - dy * sin + ax - 0.5;
            let ty = dx * sin + dy * cos + ay - 0.5;

            let (fx, fy) = (tx.floor(), ty.floor());
            let (x0, y0) = (fx as i32, fy as i32);
            let (wx, wy) = (tx - fx, ty - fy);
            let c = sample(x0, y0) * (1.0 - wx) * (1.0 - wy)
                + sample(x0 + 1, y0) * wx * (1.0 - wy)
                + sample(x0, y0 + 1) * (1.0 - wx) * wy
                + sample(x0 + 1, y0 + 1) * wx * wy;

            if c > 0.0 {
                blend(canvas, pos.0 + cx, pos.1 + cy, color, c);
            }
        }
    }
}
