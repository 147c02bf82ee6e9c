use crate::config::PushoverConfig;
use crate::plugins::traits::{NotificationResult, NotifierPlugin, RestockEvent};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Form body accepted by the Pushover messages endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PushoverMessage {
    pub token: String,
    pub user: String,
    pub title: String,
    pub message: String,
    pub priority: i8,
}

#[derive(Debug, Deserialize)]
struct PushoverResponse {
    request: Option<String>,
}

pub struct PushoverNotifier {
    client: Client,
    config: PushoverConfig,
}

impl PushoverNotifier {
    pub fn new(client: Client, config: PushoverConfig) -> Self {
        PushoverNotifier { client, config }
    }

    pub fn create_message(&self, event: &RestockEvent) -> PushoverMessage {
        PushoverMessage {
            token: self.config.api_token.clone(),
            user: self.config.user_key.clone(),
            title: format!("{} Restock Alert", event.product_name),
            message: format!("🚨 {} product is now in stock!\n\n{}", event.product_name, event.url),
            priority: self.config.priority,
        }
    }
}

#[async_trait]
impl NotifierPlugin for PushoverNotifier {
    async fn notify(&self, event: &RestockEvent) -> Result<NotificationResult> {
        let message = self.create_message(event);

        let response = self
            .client
            .post(&self.config.api_url)
            .form(&message)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(AppError::Notification {
                status: status.as_u16(),
                body,
            });
        }

        let message_id = serde_json::from_str::<PushoverResponse>(&body)
            .ok()
            .and_then(|r| r.request);

        Ok(NotificationResult {
            success: true,
            message_id,
            error: None,
        })
    }
}
