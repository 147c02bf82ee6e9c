use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::config::AppConfig;
use crate::fetcher::PageFetcher;
use crate::models::ProductTarget;
use crate::plugins::notifiers::PushoverNotifier;
use crate::plugins::traits::{NotifierPlugin, RestockEvent};
use crate::stock_checker::{HttpStockChecker, StockCheck};
use crate::utils::error::Result;
use crate::utils::http::build_client;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollSummary {
    pub checked: usize,
    /// Name of the target that won this pass, if any.
    pub in_stock: Option<String>,
    pub notified: bool,
}

/// Checks targets in priority order on a fixed interval and alerts on the
/// first one found in stock.
pub struct StockPoller {
    targets: Vec<ProductTarget>,
    checker: Arc<dyn StockCheck>,
    notifier: Arc<dyn NotifierPlugin>,
    interval: Duration,
}

impl StockPoller {
    pub fn new(
        targets: Vec<ProductTarget>,
        checker: Arc<dyn StockCheck>,
        notifier: Arc<dyn NotifierPlugin>,
        interval: Duration,
    ) -> Self {
        Self {
            targets,
            checker,
            notifier,
            interval,
        }
    }

    /// Wires the HTTP checker and the Pushover notifier around one shared client.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = build_client(&config.scraper)?;
        let targets = ProductTarget::from_configs(&config.targets)?;
        let checker = HttpStockChecker::new(PageFetcher::new(client.clone(), &config.scraper));
        let notifier = PushoverNotifier::new(client, config.notifications.pushover.clone());

        Ok(Self::new(
            targets,
            Arc::new(checker),
            Arc::new(notifier),
            Duration::from_secs(config.scheduler.check_interval),
        ))
    }

    pub fn targets(&self) -> &[ProductTarget] {
        &self.targets
    }

    /// One pass: stops at the first target in stock, so at most one
    /// notification goes out.
    pub async fn poll_once(&self) -> PollSummary {
        tracing::info!("Checking stock...");
        let mut checked = 0;

        for target in &self.targets {
            checked += 1;
            let result = self.checker.check(target).await;

            if !result.in_stock {
                tracing::debug!(product = %target.name, error = ?result.error, "Not in stock");
                continue;
            }

            tracing::info!(product = %target.name, url = %target.url, "Product is in stock");
            let notified = self.send_notification(target).await;
            return PollSummary {
                checked,
                in_stock: Some(target.name.clone()),
                notified,
            };
        }

        tracing::info!("Not in stock yet.");
        PollSummary {
            checked,
            in_stock: None,
            notified: false,
        }
    }

    async fn send_notification(&self, target: &ProductTarget) -> bool {
        let event = RestockEvent::new(target.name.clone(), target.url.clone());

        match self.notifier.notify(&event).await {
            Ok(result) => {
                tracing::info!(
                    product = %target.name,
                    message_id = ?result.message_id,
                    "Notification sent successfully"
                );
                result.success
            }
            Err(e) => {
                tracing::error!(product = %target.name, error = %e, "Error sending notification");
                false
            }
        }
    }

    /// Polls until `shutdown` flips to true. The signal is observed while
    /// sleeping between passes; a pass in flight is allowed to finish.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            targets = self.targets.len(),
            interval_secs = self.interval.as_secs(),
            "Starting background stock checker"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            self.poll_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                changed = shutdown.changed() => {
                    // A dropped sender also means nobody will ever ask us to keep going
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Background stock checker stopped");
    }
}
