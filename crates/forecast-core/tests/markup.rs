// File: crates/forecast-core/tests/markup.rs
// Purpose: Generated forecast pages read back through the HTML extractor.

use chrono::TimeZone;
use chrono_tz::America::Toronto;
use forecast_core::{extract, hourly_slots, ForecastMarkup, ForecastReading, HtmlDocument};

#[test]
fn hourly_slots_follow_now_in_zone() {
    let now = Toronto.with_ymd_and_hms(2024, 3, 1, 22, 41, 7).unwrap();
    assert_eq!(hourly_slots(&now, 5), ["23:00", "00:00", "01:00", "02:00", "03:00"]);
    assert!(hourly_slots(&now, 0).is_empty());
}

#[test]
fn generated_page_extracts_rounded_values() {
    let readings = vec![
        ForecastReading { time: "10:00".into(), temperature: 21.04, humidity: 40.0 },
        ForecastReading { time: "11:00".into(), temperature: -0.26, humidity: 38.55 },
    ];
    let html = ForecastMarkup::new().document(&readings);
    let series = extract(&HtmlDocument::parse(&html).unwrap());
    assert_eq!(series.times(), ["10:00", "11:00"]);
    assert_eq!(series.temperatures(), ["21.0°C", "-0.3°C"]);
}

#[test]
fn raw_items_with_blanks_are_dropped_on_read() {
    let m = ForecastMarkup::new();
    let html = format!("<body>{}{}</body>", m.raw_item("10:00", "20°C", ""), m.raw_item("11:00", "21°C", "30%"));
    let series = extract(&HtmlDocument::parse(&html).unwrap());
    assert_eq!(series.times(), ["11:00"]);
}

#[test]
fn custom_selectors_and_units_round_trip() {
    let selectors = forecast_core::Selectors {
        item: ".slot".into(),
        time: ".when".into(),
        temperature: ".temp".into(),
        humidity: ".hum".into(),
    };
    let m = ForecastMarkup::new().with_selectors(selectors.clone()).with_units("°F", " pct");
    let html = m.document(&[ForecastReading { time: "09:00".into(), temperature: 70.26, humidity: 51.0 }]);
    assert!(html.contains("class=\"slot\""));

    let series = extract(&HtmlDocument::parse_with(&html, &selectors).unwrap());
    assert_eq!(series.temperatures(), ["70.3°F"]);
    // default selectors find nothing in this page
    assert!(extract(&HtmlDocument::parse(&html).unwrap()).is_empty());
}
