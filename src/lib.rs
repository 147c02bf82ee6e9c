pub mod config;
pub mod fetcher;
pub mod models;
pub mod plugins;
pub mod scheduler;
pub mod stock_checker;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use config::AppConfig;
pub use models::{CheckResult, ProductTarget};
pub use scheduler::{PollSummary, StockPoller};
pub use stock_checker::{HttpStockChecker, StockCheck};
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
