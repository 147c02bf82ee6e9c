use reqwest::Client;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::utils::error::Result;

/// Shared client for page fetches and notification posts. The timeout bounds
/// every request made through it.
pub fn build_client(config: &ScraperConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout))
        .build()?;
    Ok(client)
}
