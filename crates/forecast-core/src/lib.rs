// File: crates/forecast-core/src/lib.rs
// Summary: Core library entry point; exports the forecast extraction and chart rendering API.

pub mod chart;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod html;
pub mod markup;
pub mod series;
pub mod style;

pub use chart::{on_page_ready, render, ChartConstructor, RenderOutcome};
pub use config::{ChartConfig, ChartOptions, DATASET_LABEL};
pub use document::{Field, ForecastDocument, ForecastItem, Selectors};
pub use error::ForecastError;
pub use extract::{extract, EmptyDataGuard, MISSING_DATA_MESSAGE};
pub use html::HtmlDocument;
pub use markup::{hourly_slots, ForecastMarkup, ForecastReading};
pub use series::{parse_leading_float, ChartSeries, ForecastEntry};
pub use style::{GradientStop, Rgba, StrokeStyle};
