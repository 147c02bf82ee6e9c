pub mod traits;
pub mod predicates;
pub mod notifiers;

pub use traits::{NotifierPlugin, StockPredicate};
