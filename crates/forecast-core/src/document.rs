// File: crates/forecast-core/src/document.rs
// Summary: Document abstraction the extractor reads forecast items from.
// Notes:
// - Implemented by the scraper-backed `HtmlDocument` here and by the
//   web-sys DOM wrapper in `forecast-web`; tests use in-memory fakes.

use serde::{Deserialize, Serialize};

/// Text fields a forecast item carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    Temperature,
    Humidity,
}

/// CSS selectors used to locate forecast items and their children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub item: String,
    pub time: String,
    pub temperature: String,
    pub humidity: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            item: ".forecast-item".to_string(),
            time: ".forecast-time".to_string(),
            temperature: ".forecast-temperatureValue".to_string(),
            humidity: ".forecast-humidityValue".to_string(),
        }
    }
}

impl Selectors {
    /// Child selector for `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Time => &self.time,
            Field::Temperature => &self.temperature,
            Field::Humidity => &self.humidity,
        }
    }
}

/// One forecast node.
pub trait ForecastItem {
    /// Text content of the first descendant matching `field`, or `None` when
    /// there is no such descendant. Text is returned verbatim.
    fn text(&self, field: Field) -> Option<String>;
}

impl<T: ForecastItem + ?Sized> ForecastItem for &T {
    fn text(&self, field: Field) -> Option<String> {
        (**self).text(field)
    }
}

/// A document that can be queried for forecast items.
pub trait ForecastDocument {
    type Item<'a>: ForecastItem
    where
        Self: 'a;

    /// All forecast items, in document order.
    fn forecast_items(&self) -> Vec<Self::Item<'_>>;
}
