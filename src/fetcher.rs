use reqwest::Client;
use reqwest::header::USER_AGENT;

use crate::config::ScraperConfig;
use crate::utils::error::{AppError, Result};

/// Downloads product pages the way a desktop browser would ask for them.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
    user_agent: String,
}

impl PageFetcher {
    pub fn new(client: Client, config: &ScraperConfig) -> Self {
        Self {
            client,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Returns the page body. Fails on transport errors, timeouts and any
    /// non-success status.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        tracing::info!(url, status = status.as_u16(), "Response status code");

        if !status.is_success() {
            return Err(AppError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
