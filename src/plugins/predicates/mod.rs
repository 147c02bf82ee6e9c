// Stock predicate implementations
pub mod button_state;
pub mod button_presence;

pub use button_state::ButtonStatePredicate;
pub use button_presence::ButtonPresencePredicate;

use scraper::Selector;
use std::sync::Arc;

use crate::config::PredicateConfig;
use crate::plugins::traits::StockPredicate;
use crate::utils::error::{AppError, Result};

pub fn from_config(config: &PredicateConfig) -> Result<Arc<dyn StockPredicate>> {
    let predicate: Arc<dyn StockPredicate> = match config {
        PredicateConfig::ButtonState { selector, disabled_class } => {
            Arc::new(ButtonStatePredicate::new(selector, disabled_class)?)
        }
        PredicateConfig::ButtonPresence { selector } => Arc::new(ButtonPresencePredicate::new(selector)?),
    };
    Ok(predicate)
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
