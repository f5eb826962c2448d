// File: crates/forecast-web/src/dom.rs
// Summary: Forecast document over the browser DOM (web-sys).

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use forecast_core::{Field, ForecastDocument, ForecastItem, Selectors};

pub struct WebDocument {
    document: Document,
    selectors: Selectors,
}

impl WebDocument {
    pub fn new(document: Document, selectors: Selectors) -> Self {
        Self { document, selectors }
    }
}

pub struct WebItem<'a> {
    element: Element,
    selectors: &'a Selectors,
}

impl ForecastItem for WebItem<'_> {
    /// `textContent` of the first matching descendant. A selector the
    /// browser rejects reads as a missing field.
    fn text(&self, field: Field) -> Option<String> {
        self.element
            .query_selector(self.selectors.field(field))
            .ok()
            .flatten()
            .and_then(|child| child.text_content())
    }
}

impl ForecastDocument for WebDocument {
    type Item<'a> = WebItem<'a>;

    fn forecast_items(&self) -> Vec<WebItem<'_>> {
        let Ok(list) = self.document.query_selector_all(&self.selectors.item) else {
            tracing::warn!(selector = %self.selectors.item, "forecast item selector rejected");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| WebItem { element, selectors: &self.selectors })
            .collect()
    }
}
