// File: crates/demo/src/main.rs
// Summary: CLI that reads rendered forecast markup, draws the temperature chart to PNG, or writes sample markup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use forecast_core::markup::DEFAULT_SLOTS;
use forecast_core::{
    extract, hourly_slots, on_page_ready, ChartConfig, ChartOptions, EmptyDataGuard, ForecastMarkup,
    ForecastReading, HtmlDocument, RenderOutcome,
};
use forecast_render_skia::{raster_surface, theme, SkiaChartLibrary, HEIGHT, WIDTH};

#[derive(Parser)]
#[command(name = "forecast-chart")]
#[command(about = "Draw the forecast temperature chart from rendered forecast markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract forecast items from an HTML file and render the line chart to PNG
    Render {
        /// Forecast page (.html/.htm are tried interchangeably)
        input: String,
        /// Output PNG; defaults to target/out/forecast_<stem>.png
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = WIDTH)]
        width: i32,
        #[arg(long, default_value_t = HEIGHT)]
        height: i32,
        /// Theme preset (dark or light; unknown names fall back to dark)
        #[arg(long, default_value = "dark")]
        theme: String,
        /// JSON file with chart options; keys not given keep their defaults
        #[arg(long)]
        options: Option<PathBuf>,
        /// Keep the always-true empty-data check of the deployed page script
        #[arg(long)]
        legacy_guard: bool,
        /// Also write the chart configuration as JSON
        #[arg(long)]
        config_json: Option<PathBuf>,
    },
    /// Write a forecast page with hourly slots from now
    Sample {
        #[arg(short, long, default_value = "target/out/forecast_sample.html")]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SLOTS)]
        count: usize,
        /// IANA timezone for the slot labels
        #[arg(long, default_value = "America/Toronto")]
        tz: String,
        /// Temperature of the first slot, in °C
        #[arg(long, default_value_t = 20.0)]
        base_temp: f64,
        /// Humidity of the first slot, in %
        #[arg(long, default_value_t = 45.0)]
        base_humidity: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Render { input, out, width, height, theme, options, legacy_guard, config_json } => {
            let mut opts = load_options(options.as_deref())?;
            if legacy_guard {
                opts.guard = EmptyDataGuard::Legacy;
            }
            run_render(&input, out, width, height, &theme, &opts, config_json.as_deref())
        }
        Commands::Sample { out, count, tz, base_temp, base_humidity } => {
            run_sample(&out, count, &tz, base_temp, base_humidity)
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<ChartOptions> {
    let Some(path) = path else { return Ok(ChartOptions::default()) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartOptions::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn run_render(
    input: &str,
    out: Option<PathBuf>,
    width: i32,
    height: i32,
    theme_name: &str,
    opts: &ChartOptions,
    config_json: Option<&Path>,
) -> Result<()> {
    let (path, used_alt) = resolve_path(input)?;
    tracing::info!(input = %path.display(), "reading forecast page");
    if used_alt {
        tracing::info!("extension swapped between .html/.htm");
    }

    let markup = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let doc = HtmlDocument::parse_with(&markup, &opts.selectors)?;

    if let Some(json_path) = config_json {
        let config = ChartConfig::line(&extract(&doc), opts);
        write_file(json_path, config.to_json_pretty()?.as_bytes())?;
        tracing::info!(path = %json_path.display(), "wrote chart config");
    }

    let library = SkiaChartLibrary::new(theme::find(theme_name));
    let surface = raster_surface(width, height)?;
    match on_page_ready(&doc, surface, &library, opts)? {
        RenderOutcome::Rendered(mut chart) => {
            let out = out.unwrap_or_else(|| out_name_for(&path));
            chart.write_png(&out)?;
            tracing::info!(points = chart.plotted, path = %out.display(), "wrote chart");
        }
        RenderOutcome::Skipped(reason) => {
            tracing::warn!(%reason, "no chart written");
        }
    }
    Ok(())
}

fn run_sample(out: &Path, count: usize, tz: &str, base_temp: f64, base_humidity: f64) -> Result<()> {
    let zone: Tz = tz.parse().map_err(|e| anyhow::anyhow!("unknown timezone {tz}: {e}"))?;
    let now = Utc::now().with_timezone(&zone);
    let readings: Vec<ForecastReading> = hourly_slots(&now, count)
        .into_iter()
        .enumerate()
        .map(|(i, time)| {
            let step = i as f64;
            ForecastReading {
                time,
                temperature: base_temp + 1.5 * (step * 0.8).sin(),
                humidity: (base_humidity - 1.2 * step).clamp(0.0, 100.0),
            }
        })
        .collect();

    write_file(out, ForecastMarkup::new().document(&readings).as_bytes())?;
    tracing::info!(slots = readings.len(), path = %out.display(), "wrote sample forecast page");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

/// Resolve path, trying the .html/.htm swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "htm" => {
            alt.set_extension("html");
            Some(alt)
        }
        "html" => {
            alt.set_extension("htm");
            Some(alt)
        }
        _ => None,
    }
}

/// Output file name like target/out/forecast_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("forecast_{stem}.png"))
}
