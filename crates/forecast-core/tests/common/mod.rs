// File: crates/forecast-core/tests/common/mod.rs
// Purpose: In-memory document and recording chart library shared by integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::Visit;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use forecast_core::{ChartConfig, ChartConstructor, Field, ForecastDocument, ForecastItem};

/// A forecast item whose fields are plain optional strings.
#[derive(Clone, Debug, Default)]
pub struct FakeItem {
    pub time: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
}

impl FakeItem {
    pub fn new(time: &str, temperature: &str, humidity: &str) -> Self {
        Self {
            time: Some(time.to_string()),
            temperature: Some(temperature.to_string()),
            humidity: Some(humidity.to_string()),
        }
    }
}

impl ForecastItem for FakeItem {
    fn text(&self, field: Field) -> Option<String> {
        match field {
            Field::Time => self.time.clone(),
            Field::Temperature => self.temperature.clone(),
            Field::Humidity => self.humidity.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    pub items: Vec<FakeItem>,
}

impl ForecastDocument for FakeDocument {
    type Item<'a> = &'a FakeItem;

    fn forecast_items(&self) -> Vec<&FakeItem> {
        self.items.iter().collect()
    }
}

/// Records every configuration it is asked to construct.
#[derive(Default)]
pub struct RecordingLibrary {
    pub calls: RefCell<Vec<(String, ChartConfig)>>,
    pub fail_with: Option<String>,
}

impl ChartConstructor for RecordingLibrary {
    type Surface = String;
    type Chart = usize;
    type Error = String;

    fn construct(&self, surface: String, config: ChartConfig) -> Result<usize, String> {
        if let Some(msg) = &self.fail_with {
            return Err(msg.clone());
        }
        let mut calls = self.calls.borrow_mut();
        calls.push((surface, config));
        Ok(calls.len())
    }
}

/// The three-item page: the middle item has an empty temperature.
pub fn scenario_document() -> FakeDocument {
    FakeDocument {
        items: vec![
            FakeItem::new("10:00", "21°C", "40%"),
            FakeItem::new("11:00", "", "38%"),
            FakeItem::new("12:00", "23°C", "35%"),
        ],
    }
}

/// Layer that keeps `(level, message)` for every event it sees.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<(Level, String)>>>);

impl EventLog {
    pub fn events(&self) -> Vec<(Level, String)> {
        self.0.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(level, _)| *level == Level::ERROR)
            .map(|(_, message)| message)
            .collect()
    }
}

struct MessageText(String);

impl Visit for MessageText {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for EventLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageText(String::new());
        event.record(&mut message);
        self.0.lock().unwrap().push((*event.metadata().level(), message.0));
    }
}

/// Run `f` with `log` as the thread's subscriber.
pub fn with_event_log<T>(f: impl FnOnce() -> T) -> (T, EventLog) {
    let log = EventLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, log)
}
