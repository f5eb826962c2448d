// File: crates/forecast-render-skia/src/chart.rs
// Summary: Skia implementation of the charting-library seam; paints a line chart config into a raster surface and encodes PNG.

use skia_safe as skia;

use forecast_core::config::{ChartConfig, Dataset, Scale};
use forecast_core::style::{GradientStop, StrokeStyle};
use forecast_core::{parse_leading_float, ChartConstructor, Rgba};

use crate::error::RenderError;
use crate::geometry::{linspace, Insets, RectF};
use crate::spline::{run_handles, Pt};
use crate::theme::Theme;

/// Room reserved on the chart edges for chrome that is switched on.
const LEGEND_BAND: u32 = 28;
const X_TICK_BAND: u32 = 24;
const Y_TICK_BAND: u32 = 48;
const TICK_FONT_SIZE: f32 = 12.0;
const LEGEND_FONT_SIZE: f32 = 13.0;
const Y_TICKS: usize = 5;

/// CPU raster surface of `width` x `height`, the drawing surface handed to
/// `SkiaChartLibrary`.
pub fn raster_surface(width: i32, height: i32) -> Result<skia::Surface, RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSurface { width, height });
    }
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(RenderError::InvalidSurface { width, height })
}

/// Line-chart "library" backed by Skia.
#[derive(Clone, Debug, Default)]
pub struct SkiaChartLibrary {
    pub theme: Theme,
    pub insets: Insets,
}

impl SkiaChartLibrary {
    pub fn new(theme: Theme) -> Self {
        Self { theme, insets: Insets::default() }
    }
}

/// A chart painted into its surface.
pub struct RenderedChart {
    surface: skia::Surface,
    /// Configured animation duration; a still raster shows the final frame.
    pub animation_ms: u32,
    /// Number of values that were plotted (parsable temperatures).
    pub plotted: usize,
}

impl RenderedChart {
    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode to PNG at `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl ChartConstructor for SkiaChartLibrary {
    type Surface = skia::Surface;
    type Chart = RenderedChart;
    type Error = RenderError;

    fn construct(&self, mut surface: skia::Surface, config: ChartConfig) -> Result<RenderedChart, RenderError> {
        let (width, height) = (surface.width(), surface.height());
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidSurface { width, height });
        }
        let plotted = paint_chart(surface.canvas(), width, height, &config, &self.theme, self.insets);
        tracing::debug!(width, height, plotted, "painted forecast chart");
        Ok(RenderedChart { surface, animation_ms: config.options.animation.duration, plotted })
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Plot rect after reserving bands for the legend and visible axes.
fn plot_area(width: i32, height: i32, base: Insets, config: &ChartConfig) -> RectF {
    let mut insets = base;
    if config.options.plugins.legend.display {
        insets.top += LEGEND_BAND;
    }
    if config.options.scales.x.display {
        insets.bottom += X_TICK_BAND;
    }
    if config.options.scales.y.display {
        insets.left += Y_TICK_BAND;
    }
    RectF::inset(width, height, insets)
}

/// (min, max) over the plottable values, widened when flat.
fn value_range(values: &[Option<f64>]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.iter().flatten() {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    if hi - lo < 1e-9 {
        return Some((lo - 1.0, hi + 1.0));
    }
    Some((lo, hi))
}

fn paint_chart(canvas: &skia::Canvas, width: i32, height: i32, config: &ChartConfig, theme: &Theme, insets: Insets) -> usize {
    canvas.clear(theme.background);

    let area = plot_area(width, height, insets, config);
    let Some(dataset) = config.dataset() else { return 0 };

    // overflowing values ("1e999") gap like unparsable text
    let values: Vec<Option<f64>> = dataset
        .data
        .iter()
        .map(|s| parse_leading_float(s).filter(|v| v.is_finite()))
        .collect();
    let count = config.labels().len().max(values.len());
    let x_at = |i: usize| -> f32 {
        if count <= 1 {
            area.center_x()
        } else {
            area.left + area.width() * i as f32 / (count - 1) as f32
        }
    };
    let range = value_range(&values);

    draw_grid(canvas, &area, count, &config.options.scales.x, &config.options.scales.y, theme, &x_at);
    if config.options.scales.x.display {
        draw_x_ticks(canvas, &area, config.labels(), theme, &x_at);
    }
    if let (true, Some(range)) = (config.options.scales.y.display, range) {
        draw_y_ticks(canvas, &area, range, theme);
    }

    let mut plotted = 0;
    if let Some((lo, hi)) = range {
        let y_at = |v: f64| -> f32 { area.bottom - ((v - lo) / (hi - lo)) as f32 * area.height() };
        let points: Vec<Option<Pt>> = values
            .iter()
            .enumerate()
            .map(|(i, v)| v.map(|v| (x_at(i), y_at(v))))
            .collect();
        plotted = points.iter().flatten().count();
        draw_line(canvas, &points, dataset, width, height, &area);
    }

    if config.options.plugins.legend.display {
        draw_legend(canvas, width, dataset, theme);
    }
    plotted
}

fn stroke_paint(style: &StrokeStyle, width: i32, height: i32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    match style {
        StrokeStyle::Solid(c) => {
            paint.set_color(color(*c));
        }
        StrokeStyle::Gradient(g) => {
            let (p0, p1) = g.scaled(width as f32, height as f32);
            let colors: Vec<skia::Color> = g.stops.iter().map(|s: &GradientStop| color(s.color)).collect();
            let positions: Vec<f32> = g.stops.iter().map(|s| s.offset.clamp(0.0, 1.0)).collect();
            let shader = skia::Shader::linear_gradient(
                (p0, p1),
                colors.as_slice(),
                Some(positions.as_slice()),
                skia::TileMode::Clamp,
                None,
                None,
            );
            match shader {
                Some(shader) => {
                    paint.set_shader(shader);
                }
                // fewer than two stops: fall back to a flat colour
                None => {
                    paint.set_color(color(style.primary()));
                }
            }
        }
    }
    paint
}

fn draw_line(canvas: &skia::Canvas, points: &[Option<Pt>], dataset: &Dataset, width: i32, height: i32, area: &RectF) {
    let mut stroke = stroke_paint(&dataset.border_color, width, height);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(dataset.border_width.max(0.0) as f32);

    // unparsable values break the line into runs
    let mut run: Vec<Pt> = Vec::new();
    let mut runs: Vec<Vec<Pt>> = Vec::new();
    for p in points {
        match p {
            Some(p) => run.push(*p),
            None if !run.is_empty() => runs.push(std::mem::take(&mut run)),
            None => {}
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }

    for run in &runs {
        if run.len() < 2 {
            continue;
        }
        let handles = run_handles(run, dataset.tension as f32, *area);
        let mut builder = skia::PathBuilder::new();
        builder.move_to(run[0]);
        for i in 1..run.len() {
            builder.cubic_to(handles[i - 1].next, handles[i].prev, run[i]);
        }
        let path = builder.detach();
        if dataset.border_width > 0.0 {
            canvas.draw_path(&path, &stroke);
        }
    }

    if dataset.point_radius > 0.0 {
        let mut fill = stroke_paint(&dataset.border_color, width, height);
        fill.set_style(skia::paint::Style::Fill);
        for p in runs.iter().flatten() {
            canvas.draw_circle(*p, dataset.point_radius as f32, &fill);
        }
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    area: &RectF,
    count: usize,
    x: &Scale,
    y: &Scale,
    theme: &Theme,
    x_at: &dyn Fn(usize) -> f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    if x.grid.draw_on_chart_area {
        for i in 0..count {
            let px = x_at(i);
            canvas.draw_line((px, area.top), (px, area.bottom), &paint);
        }
    }
    if y.grid.draw_on_chart_area {
        for py in linspace(area.top, area.bottom, Y_TICKS) {
            canvas.draw_line((area.left, py), (area.right, py), &paint);
        }
    }
}

fn draw_x_ticks(canvas: &skia::Canvas, area: &RectF, labels: &[String], theme: &Theme, x_at: &dyn Fn(usize) -> f32) {
    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.0);
    canvas.draw_line((area.left, area.bottom), (area.right, area.bottom), &axis);

    let mut text = skia::Paint::default();
    text.set_color(theme.tick);
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(TICK_FONT_SIZE);

    for (i, label) in labels.iter().enumerate() {
        let (w, _) = font.measure_str(label, Some(&text));
        canvas.draw_str(label, (x_at(i) - w * 0.5, area.bottom + TICK_FONT_SIZE + 6.0), &font, &text);
    }
}

fn draw_y_ticks(canvas: &skia::Canvas, area: &RectF, (lo, hi): (f64, f64), theme: &Theme) {
    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.0);
    canvas.draw_line((area.left, area.top), (area.left, area.bottom), &axis);

    let mut text = skia::Paint::default();
    text.set_color(theme.tick);
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(TICK_FONT_SIZE);

    let pys = linspace(area.bottom, area.top, Y_TICKS);
    for (i, py) in pys.into_iter().enumerate() {
        let v = lo + (hi - lo) * i as f64 / (Y_TICKS - 1) as f64;
        let label = format!("{:.1}", v);
        let (w, _) = font.measure_str(&label, Some(&text));
        canvas.draw_str(&label, (area.left - w - 6.0, py + TICK_FONT_SIZE * 0.35), &font, &text);
    }
}

fn draw_legend(canvas: &skia::Canvas, width: i32, dataset: &Dataset, theme: &Theme) {
    let mut text = skia::Paint::default();
    text.set_color(theme.legend_label);
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(LEGEND_FONT_SIZE);

    let swatch = 12.0;
    let gap = 6.0;
    let (w, _) = font.measure_str(&dataset.label, Some(&text));
    let total = swatch + gap + w;
    let x0 = (width as f32 - total) * 0.5;
    let y0 = 8.0;

    let mut box_paint = skia::Paint::default();
    box_paint.set_anti_alias(true);
    box_paint.set_color(color(dataset.border_color.primary()));
    canvas.draw_rect(skia::Rect::from_xywh(x0, y0, swatch, swatch), &box_paint);
    canvas.draw_str(&dataset.label, (x0 + swatch + gap, y0 + swatch - 1.0), &font, &text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_gets_a_unit_band() {
        assert_eq!(value_range(&[Some(3.0), None, Some(3.0)]), Some((2.0, 4.0)));
        assert_eq!(value_range(&[None, None]), None);
        assert_eq!(value_range(&[Some(-1.0), Some(4.0)]), Some((-1.0, 4.0)));
    }
}
