use scraper::Html;

/// What a predicate concluded from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    InStock,
    OutOfStock,
    /// The element the rule depends on is gone; the page layout has
    /// probably changed. Counts as out of stock.
    ElementMissing { selector: String },
}

impl Availability {
    pub fn is_in_stock(&self) -> bool {
        matches!(self, Availability::InStock)
    }
}

/// A rule deciding, from a product page's markup, whether it can be bought.
pub trait StockPredicate: Send + Sync {
    fn plugin_type(&self) -> &str;

    /// Never fails: a missing or unexpected element means "not in stock".
    fn evaluate(&self, document: &Html) -> Availability;
}
