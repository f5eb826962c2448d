// File: crates/forecast-web/src/lib.rs
// Summary: Browser entry points: read forecast items from the live DOM and hand the chart config to Chart.js.

pub mod chartjs;
pub mod dom;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use forecast_core::{on_page_ready, ChartOptions, RenderOutcome, MISSING_DATA_MESSAGE};

pub use chartjs::ChartJs;
pub use dom::WebDocument;

/// Render the forecast chart for `document` into `ctx`. Call once the DOM is
/// ready. A page without usable forecast data gets a console diagnostic and
/// no chart; exceptions thrown by Chart.js are returned unchanged.
#[wasm_bindgen(js_name = renderForecastChart)]
pub fn render_forecast_chart(document: Document, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
    render_with_options(document, ctx, &ChartOptions::default())
}

/// As `render_forecast_chart`, with options given as a plain JS object
/// (same keys as the JSON options file; missing keys keep defaults).
#[wasm_bindgen(js_name = renderForecastChartWith)]
pub fn render_forecast_chart_with(document: Document, ctx: CanvasRenderingContext2d, options: JsValue) -> Result<(), JsValue> {
    let opts: ChartOptions = if options.is_undefined() || options.is_null() {
        ChartOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    render_with_options(document, ctx, &opts)
}

fn render_with_options(document: Document, ctx: CanvasRenderingContext2d, opts: &ChartOptions) -> Result<(), JsValue> {
    let doc = WebDocument::new(document, opts.selectors.clone());
    match on_page_ready(&doc, ctx, &ChartJs, opts)? {
        RenderOutcome::Rendered(_chart) => Ok(()),
        RenderOutcome::Skipped(_) => {
            web_sys::console::error_1(&JsValue::from_str(MISSING_DATA_MESSAGE));
            Ok(())
        }
    }
}

/// Register the one-shot render on `DOMContentLoaded`, drawing into the
/// canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn install(canvas_id: String) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let doc = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(err) = run_on(&doc, &canvas_id) {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    // the listener lives for the page
    on_ready.forget();
    Ok(())
}

fn run_on(document: &Document, canvas_id: &str) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?;
    render_forecast_chart(document.clone(), ctx)
}
