// File: crates/forecast-web/src/chartjs.rs
// Summary: Binding to the page's global Chart.js `Chart` constructor.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use forecast_core::style::{LinearGradient, StrokeStyle};
use forecast_core::{ChartConfig, ChartConstructor};

#[wasm_bindgen]
extern "C" {
    /// Chart.js chart instance.
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &JsChart);
}

/// Chart.js as a `ChartConstructor`; the surface is a canvas 2D context.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartJs;

impl ChartConstructor for ChartJs {
    type Surface = CanvasRenderingContext2d;
    type Chart = JsChart;
    type Error = JsValue;

    fn construct(&self, ctx: CanvasRenderingContext2d, config: ChartConfig) -> Result<JsChart, JsValue> {
        let js_config = config.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        if let Some(StrokeStyle::Gradient(g)) = config.dataset().map(|d| &d.border_color) {
            let gradient = canvas_gradient(&ctx, g)?;
            let datasets = js_sys::Reflect::get(&js_sys::Reflect::get(&js_config, &"data".into())?, &"datasets".into())?;
            let first = js_sys::Reflect::get(&datasets, &0u32.into())?;
            js_sys::Reflect::set(&first, &"borderColor".into(), &gradient)?;
        }
        JsChart::new(&ctx, &js_config)
    }
}

/// Materialise a surface-relative gradient against the context's canvas.
fn canvas_gradient(ctx: &CanvasRenderingContext2d, g: &LinearGradient) -> Result<CanvasGradient, JsValue> {
    let (width, height) = ctx
        .canvas()
        .map(|c| (c.width() as f32, c.height() as f32))
        .unwrap_or((1.0, 1.0));
    let ((x0, y0), (x1, y1)) = g.scaled(width, height);
    let gradient = ctx.create_linear_gradient(x0 as f64, y0 as f64, x1 as f64, y1 as f64);
    for stop in &g.stops {
        gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css())?;
    }
    Ok(gradient)
}
