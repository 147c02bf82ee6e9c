// Notifier plugin implementations
pub mod pushover;

pub use pushover::PushoverNotifier;
