use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestockEvent {
    pub product_name: String,
    pub url: String,
    pub detected_at: DateTime<Utc>,
}

impl RestockEvent {
    pub fn new(product_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            url: url.into(),
            detected_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    pub success: bool,
    pub message_id: Option<String>,
    pub error: Option<String>,
}

/// Trait for implementing notification methods (Pushover, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotifierPlugin: Send + Sync {
    async fn notify(&self, event: &RestockEvent) -> Result<NotificationResult>;
}
