// File: crates/forecast-core/src/error.rs
// Summary: Error type for the forecast adapter.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// The extractor produced nothing the chart could be drawn from.
    #[error("Temp or time values are missing")]
    NoData,

    /// A configured CSS selector failed to parse.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// An options file or value could not be decoded.
    #[error("invalid chart options: {0}")]
    Options(String),
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Options(err.to_string())
    }
}
