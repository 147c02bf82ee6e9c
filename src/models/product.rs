use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::config::TargetConfig;
use crate::plugins::predicates;
use crate::plugins::traits::StockPredicate;
use crate::utils::error::Result;

/// One monitored product page. Built once at startup and never mutated.
#[derive(Clone)]
pub struct ProductTarget {
    pub name: String,
    pub url: String,
    pub predicate: Arc<dyn StockPredicate>,
}

impl ProductTarget {
    pub fn new(name: impl Into<String>, url: impl Into<String>, predicate: Arc<dyn StockPredicate>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            predicate,
        }
    }

    pub fn from_config(config: &TargetConfig) -> Result<Self> {
        let predicate = predicates::from_config(&config.predicate)?;
        Ok(Self::new(config.name.clone(), config.url.clone(), predicate))
    }

    /// Builds targets in the configured order, which is the check priority.
    pub fn from_configs(configs: &[TargetConfig]) -> Result<Vec<Self>> {
        configs.iter().map(Self::from_config).collect()
    }
}

impl fmt::Debug for ProductTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductTarget")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("predicate", &self.predicate.plugin_type())
            .finish()
    }
}

/// Outcome of checking one target once. Lives for a single poll pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResult {
    pub product_name: String,
    pub in_stock: bool,
    /// Why the check could not complete, if it couldn't.
    pub error: Option<String>,
    pub response_time_ms: u64,
}

impl CheckResult {
    pub fn available(product_name: &str, in_stock: bool, response_time_ms: u64) -> Self {
        Self {
            product_name: product_name.to_string(),
            in_stock,
            error: None,
            response_time_ms,
        }
    }

    pub fn failed(product_name: &str, error: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            product_name: product_name.to_string(),
            in_stock: false,
            error: Some(error.into()),
            response_time_ms,
        }
    }
}
