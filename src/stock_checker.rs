use async_trait::async_trait;
use scraper::Html;
use tokio::time::Instant;

use crate::fetcher::PageFetcher;
use crate::models::{CheckResult, ProductTarget};
use crate::plugins::traits::Availability;
use crate::utils::error::AppError;

/// Decides whether one target is in stock right now. Implementations never
/// fail: every problem is logged and reported as "not in stock".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockCheck: Send + Sync {
    async fn check(&self, target: &ProductTarget) -> CheckResult;
}

pub struct HttpStockChecker {
    fetcher: PageFetcher,
}

impl HttpStockChecker {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Parses `html` and runs the target's predicate over it.
    pub fn evaluate_markup(target: &ProductTarget, html: &str) -> Availability {
        let document = Html::parse_document(html);
        target.predicate.evaluate(&document)
    }
}

#[async_trait]
impl StockCheck for HttpStockChecker {
    async fn check(&self, target: &ProductTarget) -> CheckResult {
        let start_time = Instant::now();
        tracing::info!(product = %target.name, url = %target.url, "Fetching product page");

        let body = match self.fetcher.fetch(&target.url).await {
            Ok(body) => body,
            Err(AppError::Http(e)) if e.is_timeout() => {
                tracing::warn!(product = %target.name, "Timed out fetching the page");
                return CheckResult::failed(
                    &target.name,
                    format!("timed out: {}", e),
                    start_time.elapsed().as_millis() as u64,
                );
            }
            Err(e) => {
                tracing::warn!(product = %target.name, error = %e, "Error fetching the page");
                return CheckResult::failed(&target.name, e.to_string(), start_time.elapsed().as_millis() as u64);
            }
        };

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        match Self::evaluate_markup(target, &body) {
            Availability::ElementMissing { selector } => CheckResult::failed(
                &target.name,
                format!("add-to-bag button '{}' not found, page structure might have changed", selector),
                elapsed_ms,
            ),
            availability => CheckResult::available(&target.name, availability.is_in_stock(), elapsed_ms),
        }
    }
}
