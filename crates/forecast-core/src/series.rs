// File: crates/forecast-core/src/series.rs
// Summary: Forecast entry and the index-aligned time/temperature series fed to the chart.

use crate::document::{Field, ForecastItem};

/// Raw text read from one forecast item. Lives for a single scan step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForecastEntry {
    pub time: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
}

impl ForecastEntry {
    pub fn read<I: ForecastItem + ?Sized>(item: &I) -> Self {
        Self {
            time: item.text(Field::Time),
            temperature: item.text(Field::Temperature),
            humidity: item.text(Field::Humidity),
        }
    }

    /// `(time, temperature)` when all three fields are present and non-empty.
    /// Humidity gates inclusion but is not part of the result.
    pub fn into_point(self) -> Option<(String, String)> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if !present(&self.humidity) {
            return None;
        }
        match (self.time, self.temperature) {
            (Some(time), Some(temp)) if !time.is_empty() && !temp.is_empty() => Some((time, temp)),
            _ => None,
        }
    }
}

/// Times and temperatures, index-aligned.
/// Contract: `times().len() == temperatures().len()`; the only way in is `push`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSeries {
    times: Vec<String>,
    temperatures: Vec<String>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one point to both sequences.
    pub fn push(&mut self, time: impl Into<String>, temperature: impl Into<String>) {
        self.times.push(time.into());
        self.temperatures.push(temperature.into());
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn temperatures(&self) -> &[String] {
        &self.temperatures
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty() && self.temperatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.times
            .iter()
            .zip(self.temperatures.iter())
            .map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

impl<T: Into<String>, V: Into<String>> FromIterator<(T, V)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut series = ChartSeries::new();
        for (t, v) in iter {
            series.push(t, v);
        }
        series
    }
}

/// Numeric value of the longest leading decimal prefix of `s`, after leading
/// whitespace (`"21.5°C"` -> 21.5). `None` when there is no numeric prefix.
/// Matches how browser charting code coerces display strings to numbers.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    // exponent, only when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float_prefixes() {
        assert_eq!(parse_leading_float("21°C"), Some(21.0));
        assert_eq!(parse_leading_float("  -3.5 C"), Some(-3.5));
        assert_eq!(parse_leading_float("23.4"), Some(23.4));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("7."), Some(7.0));
        assert_eq!(parse_leading_float("1e2x"), Some(100.0));
        assert_eq!(parse_leading_float("4e"), Some(4.0));
    }

    #[test]
    fn leading_float_rejects_non_numeric() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("warm"), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("°21"), None);
    }

    #[test]
    fn entry_requires_all_three_fields() {
        let full = ForecastEntry {
            time: Some("10:00".into()),
            temperature: Some("21°C".into()),
            humidity: Some("40%".into()),
        };
        assert_eq!(full.clone().into_point(), Some(("10:00".into(), "21°C".into())));

        let no_hum = ForecastEntry { humidity: Some(String::new()), ..full.clone() };
        assert_eq!(no_hum.into_point(), None);
        let no_time = ForecastEntry { time: None, ..full };
        assert_eq!(no_time.into_point(), None);
    }
}
