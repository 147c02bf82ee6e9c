use scraper::{Html, Selector};

use super::parse_selector;
use crate::plugins::traits::{Availability, StockPredicate};
use crate::utils::error::Result;

/// In stock when the buy button is rendered at all; this store drops the
/// button from the page instead of disabling it.
pub struct ButtonPresencePredicate {
    selector: Selector,
    selector_text: String,
}

impl ButtonPresencePredicate {
    pub fn new(selector: &str) -> Result<Self> {
        Ok(Self {
            selector: parse_selector(selector)?,
            selector_text: selector.to_string(),
        })
    }
}

impl StockPredicate for ButtonPresencePredicate {
    fn plugin_type(&self) -> &str {
        "button_presence"
    }

    fn evaluate(&self, document: &Html) -> Availability {
        if document.select(&self.selector).next().is_some() {
            tracing::info!(selector = %self.selector_text, "Found add-to-bag button, product is in stock");
            Availability::InStock
        } else {
            tracing::info!(selector = %self.selector_text, "Add-to-bag button absent, product out of stock");
            Availability::OutOfStock
        }
    }
}
