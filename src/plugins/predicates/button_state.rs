use scraper::{Html, Selector};

use super::parse_selector;
use crate::plugins::traits::{Availability, StockPredicate};
use crate::utils::error::Result;

/// In stock when the add-to-bag button is present and enabled. A button is
/// considered disabled when it carries the `disabled` attribute or the
/// store's disabled-style class.
pub struct ButtonStatePredicate {
    selector: Selector,
    selector_text: String,
    disabled_class: String,
}

impl ButtonStatePredicate {
    pub fn new(selector: &str, disabled_class: &str) -> Result<Self> {
        Ok(Self {
            selector: parse_selector(selector)?,
            selector_text: selector.to_string(),
            disabled_class: disabled_class.to_string(),
        })
    }
}

impl StockPredicate for ButtonStatePredicate {
    fn plugin_type(&self) -> &str {
        "button_state"
    }

    fn evaluate(&self, document: &Html) -> Availability {
        let Some(button) = document.select(&self.selector).next() else {
            tracing::warn!(
                selector = %self.selector_text,
                "Add-to-bag button not found, page structure might have changed"
            );
            return Availability::ElementMissing {
                selector: self.selector_text.clone(),
            };
        };

        let classes: Vec<&str> = button.value().classes().collect();
        let disabled_attr = button.value().attr("disabled").is_some();
        tracing::debug!(?classes, disabled_attr, "Found add-to-bag button");

        if disabled_attr || classes.contains(&self.disabled_class.as_str()) {
            tracing::info!("Button is disabled, product still out of stock");
            return Availability::OutOfStock;
        }

        tracing::info!("Button is enabled, product is in stock");
        Availability::InStock
    }
}
