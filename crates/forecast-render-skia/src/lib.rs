// File: crates/forecast-render-skia/src/lib.rs
// Summary: Skia renderer crate; paints forecast chart configurations into CPU raster surfaces.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod spline;
pub mod theme;

pub use chart::{raster_surface, RenderedChart, SkiaChartLibrary};
pub use error::RenderError;
pub use geometry::{Insets, RectF};
pub use theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;
