// File: crates/forecast-render-skia/src/error.rs
// Summary: Failures of the Skia backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create a {width}x{height} raster surface")]
    InvalidSurface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
