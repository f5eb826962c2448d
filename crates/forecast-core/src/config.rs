// File: crates/forecast-core/src/config.rs
// Summary: Chart options (tunables + defaults) and the declarative line-chart configuration built from a series.

use serde::{Deserialize, Serialize};

use crate::document::Selectors;
use crate::error::ForecastError;
use crate::extract::EmptyDataGuard;
use crate::series::ChartSeries;
use crate::style::StrokeStyle;

/// Caption of the single temperature dataset.
pub const DATASET_LABEL: &str = "celsius Degrees";

/// Knobs for one render pass. Defaults reproduce the forecast page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub label: String,
    pub border_width: f64,
    pub tension: f64,
    pub point_radius: f64,
    pub animation_ms: u32,
    pub stroke: StrokeStyle,
    pub show_legend: bool,
    pub show_axes: bool,
    pub grid_on_chart_area: bool,
    pub guard: EmptyDataGuard,
    pub selectors: Selectors,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            label: DATASET_LABEL.to_string(),
            border_width: 2.0,
            tension: 0.4,
            point_radius: 2.0,
            animation_ms: 750,
            stroke: StrokeStyle::default(),
            show_legend: false,
            show_axes: false,
            grid_on_chart_area: false,
            guard: EmptyDataGuard::Corrected,
            selectors: Selectors::default(),
        }
    }
}

impl ChartOptions {
    /// Options from a JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<String>,
    pub border_color: StrokeStyle,
    pub border_width: f64,
    pub tension: f64,
    pub point_radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub draw_on_chart_area: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub display: bool,
    pub grid: Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Scale,
    pub y: Scale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub duration: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub plugins: Plugins,
    pub scales: Scales,
    pub animation: Animation,
}

/// Declarative chart configuration in the shape browser charting
/// libraries accept (`{type, data: {labels, datasets}, options}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: Options,
}

impl ChartConfig {
    /// Single-dataset line chart: labels are the times, values the temperatures.
    pub fn line(series: &ChartSeries, opts: &ChartOptions) -> Self {
        let scale = Scale {
            display: opts.show_axes,
            grid: Grid { draw_on_chart_area: opts.grid_on_chart_area },
        };
        Self {
            chart_type: ChartType::Line,
            data: ChartData {
                labels: series.times().to_vec(),
                datasets: vec![Dataset {
                    label: opts.label.clone(),
                    data: series.temperatures().to_vec(),
                    border_color: opts.stroke.clone(),
                    border_width: opts.border_width,
                    tension: opts.tension,
                    point_radius: opts.point_radius,
                }],
            },
            options: Options {
                plugins: Plugins { legend: Legend { display: opts.show_legend } },
                scales: Scales { x: scale, y: scale },
                animation: Animation { duration: opts.animation_ms },
            },
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// The temperature dataset. Configs built by `line` always carry one.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    pub fn to_json_pretty(&self) -> Result<String, ForecastError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
