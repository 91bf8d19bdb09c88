//! Pure, synchronous rendering collaborators: price formatting and detail links.

/// Turns an amount into display text. Locale and currency rules live in the implementation.
pub trait PriceFormatter: Send + Sync {
    fn format(&self, amount: f64) -> String;
}

/// Maps a product slug to its detail-page address.
pub trait LinkResolver: Send + Sync {
    fn detail_href(&self, slug: &str) -> String;
}

/// Symbol-prefixed amount with two decimals, e.g. `$12.50`.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}

/// Resolves slugs under a fixed path prefix, `/product` by default.
#[derive(Debug, Clone)]
pub struct PathResolver {
    prefix: String,
}

impl PathResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new("/product")
    }
}

impl LinkResolver for PathResolver {
    fn detail_href(&self, slug: &str) -> String {
        format!("{}/{}", self.prefix, slug)
    }
}
