pub mod predicate;
pub mod notifier;

pub use predicate::{Availability, StockPredicate};
pub use notifier::{NotifierPlugin, NotificationResult, RestockEvent};

#[cfg(test)]
pub use notifier::MockNotifierPlugin;
