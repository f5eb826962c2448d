// File: crates/forecast-core/src/markup.rs
// Summary: Writes forecast-item markup in the shape the extractor reads (hourly slots, rounded values).

use std::fmt::Display;

use chrono::{DateTime, Duration, TimeZone};

use crate::document::Selectors;

/// Number of upcoming hourly slots the forecast page shows.
pub const DEFAULT_SLOTS: usize = 5;

/// One predicted reading as the server hands it to the template.
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastReading {
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// `%H:00` labels for the `count` whole hours after `now`, in `now`'s zone.
pub fn hourly_slots<Tz>(now: &DateTime<Tz>, count: usize) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    (1..=count as i64)
        .map(|h| (now.clone() + Duration::hours(h)).format("%H:00").to_string())
        .collect()
}

/// Renders readings as `.forecast-item` blocks.
pub struct ForecastMarkup {
    selectors: Selectors,
    temperature_unit: String,
    humidity_unit: String,
}

impl Default for ForecastMarkup {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            temperature_unit: "°C".to_string(),
            humidity_unit: "%".to_string(),
        }
    }
}

impl ForecastMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, temperature: impl Into<String>, humidity: impl Into<String>) -> Self {
        self.temperature_unit = temperature.into();
        self.humidity_unit = humidity.into();
        self
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// One item; values are rounded to a single decimal.
    pub fn item(&self, reading: &ForecastReading) -> String {
        let temp = format!("{:.1}{}", reading.temperature, self.temperature_unit);
        let hum = format!("{:.1}{}", reading.humidity, self.humidity_unit);
        self.raw_item(&reading.time, &temp, &hum)
    }

    /// One item from display strings as-is (empty strings are kept, which
    /// is how incomplete items show up on the page).
    pub fn raw_item(&self, time: &str, temperature: &str, humidity: &str) -> String {
        format!(
            "<div class=\"{}\"><p class=\"{}\">{}</p><p class=\"{}\">{}</p><p class=\"{}\">{}</p></div>",
            class_name(&self.selectors.item),
            class_name(&self.selectors.time),
            escape(time),
            class_name(&self.selectors.temperature),
            escape(temperature),
            class_name(&self.selectors.humidity),
            escape(humidity),
        )
    }

    /// A complete HTML page holding `readings` in order.
    pub fn document(&self, readings: &[ForecastReading]) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"></head><body>\n<div class=\"forecast\">\n");
        for r in readings {
            out.push_str(&self.item(r));
            out.push('\n');
        }
        out.push_str("</div>\n<canvas id=\"chart\"></canvas>\n</body></html>\n");
        out
    }
}

/// Class selectors become class attributes; anything more complex is
/// written through unchanged minus a leading dot.
fn class_name(selector: &str) -> &str {
    selector.strip_prefix('.').unwrap_or(selector)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_content() {
        let m = ForecastMarkup::new();
        let html = m.raw_item("<10:00>", "a&b", "\"x\"");
        assert!(html.contains("&lt;10:00&gt;"));
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&quot;x&quot;"));
    }
}
