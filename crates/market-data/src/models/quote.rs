use serde::{Deserialize, Serialize};

use super::types::ProviderSymbol;

/// Gap-free price series plus summary statistics.
///
/// Built once by the normalizer, then shared read-only between the cache and
/// every response that serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
    /// Resolved provider symbol (not the client alias)
    pub symbol: ProviderSymbol,

    /// ISO-8601 timestamps, index-aligned with `prices`
    pub dates: Vec<String>,

    /// Close prices with provider gaps removed
    pub prices: Vec<f64>,

    /// Last retained price
    pub current_price: f64,

    /// First retained price
    pub previous_price: f64,

    /// `current_price - previous_price`
    pub change: f64,

    /// `change / previous_price * 100`
    pub change_percent: f64,
}

impl NormalizedQuote {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
