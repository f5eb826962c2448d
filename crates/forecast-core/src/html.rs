// File: crates/forecast-core/src/html.rs
// Summary: Forecast document over parsed HTML markup (scraper).

use scraper::{ElementRef, Html, Selector};

use crate::document::{Field, ForecastDocument, ForecastItem, Selectors};
use crate::error::ForecastError;

/// Parsed markup plus the compiled selectors used to query it.
pub struct HtmlDocument {
    html: Html,
    item: Selector,
    time: Selector,
    temperature: Selector,
    humidity: Selector,
}

impl HtmlDocument {
    /// Parse a full document using the default selectors.
    pub fn parse(markup: &str) -> Result<Self, ForecastError> {
        Self::parse_with(markup, &Selectors::default())
    }

    pub fn parse_with(markup: &str, selectors: &Selectors) -> Result<Self, ForecastError> {
        Ok(Self {
            html: Html::parse_document(markup),
            item: compile(&selectors.item)?,
            time: compile(&selectors.time)?,
            temperature: compile(&selectors.temperature)?,
            humidity: compile(&selectors.humidity)?,
        })
    }

    fn selector(&self, field: Field) -> &Selector {
        match field {
            Field::Time => &self.time,
            Field::Temperature => &self.temperature,
            Field::Humidity => &self.humidity,
        }
    }
}

fn compile(selector: &str) -> Result<Selector, ForecastError> {
    Selector::parse(selector).map_err(|e| ForecastError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

/// A `.forecast-item` element borrowed from an `HtmlDocument`.
pub struct HtmlItem<'a> {
    element: ElementRef<'a>,
    doc: &'a HtmlDocument,
}

impl ForecastItem for HtmlItem<'_> {
    fn text(&self, field: Field) -> Option<String> {
        self.element
            .select(self.doc.selector(field))
            .next()
            .map(|n| n.text().collect::<String>())
    }
}

impl ForecastDocument for HtmlDocument {
    type Item<'a> = HtmlItem<'a>;

    fn forecast_items(&self) -> Vec<HtmlItem<'_>> {
        self.html
            .select(&self.item)
            .map(|element| HtmlItem { element, doc: self })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_of_first_matching_child() {
        let doc = HtmlDocument::parse(
            r#"<div class="forecast-item">
                 <p class="forecast-time">10:00</p>
                 <p class="forecast-time">ignored</p>
                 <p class="forecast-temperatureValue"><b>21</b>°C</p>
               </div>"#,
        )
        .unwrap();
        let items = doc.forecast_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text(Field::Time).as_deref(), Some("10:00"));
        assert_eq!(items[0].text(Field::Temperature).as_deref(), Some("21°C"));
        assert_eq!(items[0].text(Field::Humidity), None);
    }

    #[test]
    fn rejects_unparsable_selector() {
        let selectors = Selectors { item: "div[".to_string(), ..Selectors::default() };
        let err = HtmlDocument::parse_with("<div></div>", &selectors).err().unwrap();
        assert!(matches!(err, ForecastError::Selector { ref selector, .. } if selector == "div["));
    }
}
