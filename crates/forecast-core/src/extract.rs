// File: crates/forecast-core/src/extract.rs
// Summary: Single-pass extraction of chart series from a forecast document, plus the empty-data guard.

use serde::{Deserialize, Serialize};

use crate::document::ForecastDocument;
use crate::error::ForecastError;
use crate::series::{ChartSeries, ForecastEntry};

/// Diagnostic logged when there is nothing to chart.
pub const MISSING_DATA_MESSAGE: &str = "Temp or time values are missing";

/// Scan `doc` once, in document order. Items lacking a non-empty time,
/// temperature or humidity are skipped without being reported.
pub fn extract<D: ForecastDocument + ?Sized>(doc: &D) -> ChartSeries {
    let items = doc.forecast_items();
    let total = items.len();
    let series: ChartSeries = items
        .iter()
        .filter_map(|item| ForecastEntry::read(item).into_point())
        .collect();
    tracing::debug!(items = total, kept = series.len(), "extracted forecast series");
    series
}

/// How the no-data condition is decided before rendering.
///
/// The deployed page script tested `temps.length === 0 || times`; an array is
/// always truthy, so that check aborted on every load and the chart was never
/// built. `Legacy` keeps that behaviour for parity; `Corrected` aborts only
/// when there is nothing to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDataGuard {
    #[default]
    Corrected,
    Legacy,
}

impl EmptyDataGuard {
    pub fn check(self, series: &ChartSeries) -> Result<(), ForecastError> {
        let missing = match self {
            EmptyDataGuard::Corrected => {
                series.temperatures().is_empty() || series.times().is_empty()
            }
            EmptyDataGuard::Legacy => true,
        };
        if missing {
            Err(ForecastError::NoData)
        } else {
            Ok(())
        }
    }
}
