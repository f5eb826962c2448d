// File: crates/forecast-core/tests/extract.rs
// Purpose: Extraction keeps complete items in document order and drops incomplete ones.

mod common;

use common::{scenario_document, FakeDocument, FakeItem};
use forecast_core::{extract, ChartSeries, HtmlDocument};

#[test]
fn scenario_skips_item_with_empty_temperature() {
    let series = extract(&scenario_document());
    assert_eq!(series.times(), ["10:00", "12:00"]);
    assert_eq!(series.temperatures(), ["21°C", "23°C"]);
}

#[test]
fn well_formed_items_are_kept_in_order() {
    let items: Vec<FakeItem> = (0..24)
        .map(|h| FakeItem::new(&format!("{h:02}:00"), &format!("{}°C", 10 + h), "50%"))
        .collect();
    let series = extract(&FakeDocument { items });
    assert_eq!(series.len(), 24);
    assert_eq!(series.times().len(), series.temperatures().len());
    for (i, (time, temp)) in series.iter().enumerate() {
        assert_eq!(time, format!("{i:02}:00"));
        assert_eq!(temp, format!("{}°C", 10 + i));
    }
}

#[test]
fn each_missing_field_excludes_only_its_item() {
    let good = || FakeItem::new("09:00", "19°C", "41%");
    let mut no_time = FakeItem::new("x", "20°C", "40%");
    no_time.time = None;
    let mut no_temp = FakeItem::new("10:00", "x", "40%");
    no_temp.temperature = None;
    let mut no_hum = FakeItem::new("11:00", "22°C", "x");
    no_hum.humidity = None;
    let empty_hum = FakeItem::new("12:00", "23°C", "");

    let doc = FakeDocument { items: vec![good(), no_time, no_temp, no_hum, empty_hum, good()] };
    let series = extract(&doc);
    assert_eq!(series.times(), ["09:00", "09:00"]);
    assert_eq!(series.temperatures(), ["19°C", "19°C"]);
}

#[test]
fn empty_document_yields_empty_series() {
    let series = extract(&FakeDocument::default());
    assert_eq!(series, ChartSeries::new());
    assert!(series.is_empty());
}

#[test]
fn text_is_taken_verbatim() {
    let doc = FakeDocument { items: vec![FakeItem::new(" 10:00 ", "  ", "40%")] };
    let series = extract(&doc);
    assert_eq!(series.times(), [" 10:00 "]);
    assert_eq!(series.temperatures(), ["  "]);
}

#[test]
fn html_scenario_matches_fake_document() {
    let html = r#"
        <html><body>
          <div class="forecast-item">
            <p class="forecast-time">10:00</p>
            <p class="forecast-temperatureValue">21°C</p>
            <p class="forecast-humidityValue">40%</p>
          </div>
          <div class="forecast-item">
            <p class="forecast-time">11:00</p>
            <p class="forecast-temperatureValue"></p>
            <p class="forecast-humidityValue">38%</p>
          </div>
          <div class="forecast-item">
            <p class="forecast-time">12:00</p>
            <p class="forecast-temperatureValue">23°C</p>
            <p class="forecast-humidityValue">35%</p>
          </div>
          <div class="forecast-item">
            <p class="forecast-time">13:00</p>
            <p class="forecast-temperatureValue">24°C</p>
          </div>
        </body></html>"#;
    let doc = HtmlDocument::parse(html).expect("parse");
    assert_eq!(extract(&doc), extract(&scenario_document()));
}
