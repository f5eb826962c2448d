// File: crates/forecast-core/src/chart.rs
// Summary: Charting-library seam, the render call and the one-shot page-ready pipeline.

use crate::config::{ChartConfig, ChartOptions};
use crate::document::ForecastDocument;
use crate::error::ForecastError;
use crate::extract::{extract, MISSING_DATA_MESSAGE};
use crate::series::ChartSeries;

/// A charting library: takes a drawing surface and a configuration and
/// produces a chart bound to that surface.
pub trait ChartConstructor {
    /// Render target handed over by the host (canvas context, raster surface, ...).
    type Surface;
    /// Handle the library returns for the constructed chart.
    type Chart;
    /// The library's own failure type; passed through untouched.
    type Error;

    fn construct(&self, surface: Self::Surface, config: ChartConfig) -> Result<Self::Chart, Self::Error>;
}

/// Build the line-chart configuration for `series` and hand it to `library`.
/// Library failures propagate as-is.
pub fn render<C: ChartConstructor + ?Sized>(
    series: &ChartSeries,
    surface: C::Surface,
    library: &C,
    opts: &ChartOptions,
) -> Result<C::Chart, C::Error> {
    let config = ChartConfig::line(series, opts);
    tracing::debug!(points = series.len(), "constructing forecast chart");
    library.construct(surface, config)
}

/// Result of a page-ready pass.
#[derive(Debug)]
pub enum RenderOutcome<T> {
    Rendered(T),
    /// Nothing was drawn; the diagnostic has already been logged.
    Skipped(ForecastError),
}

impl<T> RenderOutcome<T> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }

    pub fn chart(self) -> Option<T> {
        match self {
            RenderOutcome::Rendered(chart) => Some(chart),
            RenderOutcome::Skipped(_) => None,
        }
    }
}

/// Extract, guard, render. Runs once per page load over a static document.
///
/// When there is no usable data the diagnostic is logged, the library is
/// not called and `Skipped` is returned; this is not an error.
pub fn on_page_ready<D, C>(
    doc: &D,
    surface: C::Surface,
    library: &C,
    opts: &ChartOptions,
) -> Result<RenderOutcome<C::Chart>, C::Error>
where
    D: ForecastDocument + ?Sized,
    C: ChartConstructor + ?Sized,
{
    let series = extract(doc);
    if let Err(err) = opts.guard.check(&series) {
        tracing::error!(guard = ?opts.guard, points = series.len(), "{}", MISSING_DATA_MESSAGE);
        return Ok(RenderOutcome::Skipped(err));
    }
    render(&series, surface, library, opts).map(RenderOutcome::Rendered)
}
