//! Grouped bar chart of metric values per configuration.
//!
//! The plot is drawn with plotters into an RGB buffer through
//! [`FontBackend`], so the mesh, caption and annotations use the shared font
//! layer and render the same way with or without a system font. The 45°
//! category labels are the one exception: plotters only turns text by
//! quarter turns, so they are drawn onto the finished image.

use crate::config::ChartConfig;
use crate::error::SchemaError;
use crate::export::font::FontHandle;
use crate::export::keyboard_image::save_png;
use crate::export::plot_backend::FontBackend;
use crate::export::raster::{self, Anchor};
use crate::models::stats::{series_names, series_values};
use crate::models::{RgbColor, StatsTable};
use anyhow::{Context, Result};
use image::RgbImage;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::FRAC_1_SQRT_2;
use std::path::Path;
use tracing::debug;

/// Outer padding and gap between chart parts, in pixels.
const PAD: i32 = 12;
/// Tick mark length in pixels.
const TICK_LEN: i32 = 5;
/// Legend colour swatch edge in pixels.
const SWATCH: i32 = 14;
/// Rotation of the category labels, counter-clockwise.
const CATEGORY_LABEL_ANGLE: f32 = 45.0;
/// Upper bound on the number of y axis labels.
const Y_LABELS: usize = 8;

/// One metric, drawn as one bar per configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Metric name, shown in the legend
    pub name: String,
    /// Value per configuration, in table order
    pub values: Vec<f64>,
    /// Largest value, the denominator of the bar annotations
    pub max: f64,
    /// Bar fill
    pub color: RgbColor,
}

/// Chart contents resolved from a statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Configuration names along the x axis
    pub categories: Vec<String>,
    /// Metric series in sorted name order
    pub series: Vec<Series>,
}

impl ChartData {
    /// Collects categories and series, checking every value the chart needs.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::EmptyTable`] when there is no configuration
    /// - [`SchemaError::MissingMetric`] when a configuration lacks a metric of
    ///   the first entry
    pub fn from_stats(stats: &StatsTable) -> Result<Self, SchemaError> {
        let names = series_names(stats)?;
        let values = series_values(stats, &names)?;
        let count = names.len();

        let series = names
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (name, values))| {
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                Series {
                    name,
                    values,
                    max,
                    color: series_color(i, count),
                }
            })
            .collect();

        Ok(Self {
            categories: stats.keys().cloned().collect(),
            series,
        })
    }

    /// Centre of the bar for `series` in `category`, in category units.
    #[must_use]
    pub fn bar_x(category: usize, series: usize, bar_width: f64) -> f64 {
        category as f64 + series as f64 * bar_width
    }

    /// Tick position centred under the bar group of `category`.
    #[must_use]
    pub fn tick_x(&self, category: usize, bar_width: f64) -> f64 {
        let spread = self.series.len().saturating_sub(1) as f64;
        category as f64 + bar_width * spread / 2.0
    }

    /// X data range covering every bar plus a 5% margin.
    fn x_range(&self, bar_width: f64) -> (f64, f64) {
        let last_category = self.categories.len().saturating_sub(1);
        let last_series = self.series.len().saturating_sub(1);
        let lo = -bar_width / 2.0;
        let hi = Self::bar_x(last_category, last_series, bar_width) + bar_width / 2.0;
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    }

    /// Y data range from zero to the extreme values, with headroom for annotations.
    fn y_range(&self) -> (f64, f64) {
        let values = self.series.iter().flat_map(|s| s.values.iter().copied());
        let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        if span <= 0.0 {
            return (0.0, 1.0);
        }
        let lo = if lo < 0.0 { lo - span * 0.05 } else { lo };
        (lo, hi + span * 0.1)
    }
}

/// Colour of series `index` out of `count`, spread evenly over viridis.
///
/// A single series takes the start of the map.
fn series_color(index: usize, count: usize) -> RgbColor {
    let t = if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    };
    RgbColor::from(ViridisRGB::get_color(t))
}

/// Annotation text for a bar: its ratio to the series maximum.
///
/// The ratio is printed with three decimals and a single leading `'0'`
/// removed, so 0.842 reads `x.842` and 1.0 reads `x1.000`. A series whose
/// values are all zero has no defined ratio and reads `xnan`.
#[must_use]
pub fn format_ratio_label(value: f64, max: f64) -> String {
    let ratio = value / max;
    if ratio.is_nan() {
        return "xnan".to_string();
    }
    let ratio = format!("{ratio:.3}");
    let trimmed = ratio.strip_prefix('0').unwrap_or(&ratio);
    format!("x{trimmed}")
}

/// Y axis label text: up to four decimals, trailing zeros dropped.
fn format_tick_label(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn text_style(px: f32, color: &RGBColor) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, f64::from(px), FontStyle::Normal).color(color)
}

/// Renders the grouped bar chart.
///
/// One group of bars per configuration (table order), one bar per metric of
/// the first entry (sorted by name), each annotated with its ratio to the
/// metric's maximum. Series colours are spread over the viridis map.
pub fn render_chart(stats: &StatsTable, config: &ChartConfig, font: &FontHandle) -> Result<RgbImage> {
    config.validate()?;
    let data = ChartData::from_stats(stats)?;

    let (width, height) = (config.width, config.height);
    let bar_width = config.bar_width;
    let (x_lo, x_hi) = data.x_range(bar_width);
    let (y_lo, y_hi) = data.y_range();

    // Space around the plot, sized from the text that goes there
    let text_w = |text: &str, px: f32| font.measure(text, px).width as i32;
    let text_h = |px: f32| font.measure("Ag", px).height as i32;

    let title_h = text_h(config.title_font_size);
    let label_h = text_h(config.label_font_size);
    let tick_h = text_h(config.tick_font_size);
    let tick_w = RangedCoordf64::from(y_lo..y_hi)
        .key_points(Y_LABELS)
        .into_iter()
        .map(|v| text_w(format_tick_label(v).as_str(), config.tick_font_size))
        .max()
        .unwrap_or(0);
    let category_drop = data
        .categories
        .iter()
        .map(|c| {
            let w = f64::from(text_w(c.as_str(), config.tick_font_size) + tick_h);
            (w * FRAC_1_SQRT_2).ceil() as i32
        })
        .max()
        .unwrap_or(0);
    let legend_row = text_h(config.legend_font_size).max(SWATCH) + 6;
    let legend_text_w = data
        .series
        .iter()
        .map(|s| text_w(s.name.as_str(), config.legend_font_size))
        .max()
        .unwrap_or(0);

    let third_w = width as i32 / 3;
    let third_h = height as i32 / 3;
    let top = PAD + title_h + PAD;
    let left = (label_h + PAD + tick_w + 2 * TICK_LEN).min(third_w);
    let bottom = (TICK_LEN + tick_h / 2 + category_drop + PAD + label_h).min(third_h);
    let right = (PAD + SWATCH + 8 + legend_text_w + PAD).min(third_w);

    let foreground = config.foreground.to_plotters();
    let tick_style = text_style(config.tick_font_size, &foreground);
    let label_style = text_style(config.label_font_size, &foreground);
    let annotation_style = text_style(config.annotation_font_size, &foreground)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let legend_style =
        text_style(config.legend_font_size, &foreground).pos(Pos::new(HPos::Left, VPos::Center));
    let title_style =
        text_style(config.title_font_size, &foreground).pos(Pos::new(HPos::Center, VPos::Top));

    let mut category_labels = Vec::with_capacity(data.categories.len());
    let mut buffer = vec![0_u8; width as usize * height as usize * 3];
    {
        let backend = BitMapBackend::with_buffer(&mut buffer, (width, height));
        let root = FontBackend::new(backend, font).into_drawing_area();
        root.fill(&config.background.to_plotters())?;

        let mut chart = ChartBuilder::on(&root)
            .margin_top(top)
            .margin_left(PAD)
            .margin_bottom(PAD)
            .margin_right(right)
            .x_label_area_size(bottom)
            .y_label_area_size(left)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        // Left and bottom spines, y ticks and both axis titles; the category
        // axis gets its ticks below
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_labels(Y_LABELS)
            .y_label_formatter(&|v| format_tick_label(*v))
            .set_all_tick_mark_size(TICK_LEN)
            .axis_style(foreground.stroke_width(1))
            .label_style(tick_style)
            .axis_desc_style(label_style)
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .draw()?;

        for (s, series) in data.series.iter().enumerate() {
            let style = series.color.to_plotters().filled();
            chart.draw_series(series.values.iter().enumerate().map(|(c, &value)| {
                let x = ChartData::bar_x(c, s, bar_width);
                Rectangle::new([(x - bar_width / 2.0, 0.0), (x + bar_width / 2.0, value)], style)
            }))?;
        }

        for (s, series) in data.series.iter().enumerate() {
            for (c, &value) in series.values.iter().enumerate() {
                let (x, y) = chart.backend_coord(&(ChartData::bar_x(c, s, bar_width), value));
                root.draw_text(
                    &format_ratio_label(value, series.max),
                    &annotation_style,
                    (x, y - 3),
                )?;
            }
        }

        let (plot_left, plot_bottom) = chart.backend_coord(&(x_lo, y_lo));
        let (plot_right, plot_top) = chart.backend_coord(&(x_hi, y_hi));
        let plot_mid_y = (plot_top + plot_bottom) / 2;

        for (c, category) in data.categories.iter().enumerate() {
            let (x, _) = chart.backend_coord(&(data.tick_x(c, bar_width), y_lo));
            root.draw(&PathElement::new(
                vec![(x, plot_bottom), (x, plot_bottom + TICK_LEN)],
                foreground.stroke_width(1),
            ))?;
            category_labels.push((category.as_str(), (x, plot_bottom + TICK_LEN + tick_h / 2)));
        }

        // Legend, outside the plot on the right and vertically centred
        let legend_x = plot_right + PAD;
        let mut row_y = plot_mid_y - legend_row * data.series.len() as i32 / 2;
        for series in &data.series {
            let swatch_y = row_y + (legend_row - SWATCH) / 2;
            root.draw(&Rectangle::new(
                [(legend_x, swatch_y), (legend_x + SWATCH, swatch_y + SWATCH)],
                series.color.to_plotters().filled(),
            ))?;
            root.draw_text(
                &series.name,
                &legend_style,
                (legend_x + SWATCH + 8, row_y + legend_row / 2),
            )?;
            row_y += legend_row;
        }

        root.draw_text(&config.title, &title_style, ((plot_left + plot_right) / 2, PAD))?;
        root.present()?;
    }

    let mut image = RgbImage::from_raw(width, height, buffer)
        .context("Chart buffer does not match the canvas size")?;
    for (text, pos) in category_labels {
        raster::draw_text_rotated(
            &mut image,
            font,
            text,
            config.tick_font_size,
            pos,
            Anchor::RightCenter,
            CATEGORY_LABEL_ANGLE,
            config.foreground,
        );
    }

    debug!(
        "Rendered chart with {} configurations and {} metrics ({}x{})",
        data.categories.len(),
        data.series.len(),
        width,
        height
    );
    Ok(image)
}

/// Renders the chart and writes it to `path` as PNG.
pub fn save_chart(
    stats: &StatsTable,
    config: &ChartConfig,
    font: &FontHandle,
    path: &Path,
) -> Result<()> {
    let image = render_chart(stats, config, font)?;
    save_png(&image, path)
}
