//! Quote service: the cache-fronted pipeline behind the market endpoint.
//!
//! ```text
//! get_quote(alias, range)
//!   ├── cache hit ──────────────────────────────────────────► Arc<NormalizedQuote>
//!   └── miss ─► resolve ─► provider.fetch_chart ─► normalize ─► cache.put ─► ...
//! ```
//!
//! Only fully normalized quotes are cached; a failure leaves the cache
//! untouched so the next request for the same key retries from scratch.
//! Concurrent misses for one key may each hit the provider; the last writer
//! wins.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::QuoteCache;
use crate::clock::Clock;
use crate::errors::MarketDataError;
use crate::models::NormalizedQuote;
use crate::normalizer::normalize;
use crate::provider::ChartProvider;
use crate::resolver::resolve;

pub struct QuoteService {
    provider: Arc<dyn ChartProvider>,
    cache: Arc<QuoteCache>,
    clock: Arc<dyn Clock>,
}

impl QuoteService {
    pub fn new(
        provider: Arc<dyn ChartProvider>,
        cache: Arc<QuoteCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            cache,
            clock,
        }
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    /// Return the normalized quote for `(alias, range)`.
    ///
    /// The alias is matched case-insensitively and the cache is keyed on its
    /// uppercase form, so `spx` and `SPX` share one entry.
    pub async fn get_quote(
        &self,
        alias: &str,
        range: &str,
    ) -> Result<Arc<NormalizedQuote>, MarketDataError> {
        let cache_symbol = alias.to_uppercase();
        if let Some(cached) = self.cache.get(&cache_symbol, range) {
            return Ok(cached);
        }

        let request = resolve(alias, range, self.clock.now_secs());
        debug!(
            "Quote cache miss for {}-{}, fetching {} from {}",
            cache_symbol,
            range,
            request.provider_symbol,
            self.provider.id()
        );

        let response = self.provider.fetch_chart(&request).await?;
        let quote = normalize(&request.provider_symbol, &response).map_err(|e| {
            warn!(
                "Failed to normalize chart for {}: {}",
                request.provider_symbol, e
            );
            e
        })?;

        info!(
            "Fetched {} points for {} ({})",
            quote.len(),
            request.provider_symbol,
            range
        );

        let quote = Arc::new(quote);
        self.cache.put(&cache_symbol, range, Arc::clone(&quote));
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_CACHE_TTL;
    use crate::clock::ManualClock;
    use crate::provider::yahoo::YahooChartResponse;
    use crate::resolver::ResolvedRequest;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    const CHART: &str = r#"{"chart":{"result":[{"timestamp":[1717421400,1717507800],
        "indicators":{"quote":[{"close":[100.0,110.0]}]}}]}}"#;

    enum Behavior {
        Chart(&'static str),
        Status(u16),
    }

    struct MockProvider {
        behavior: Mutex<Behavior>,
        call_count: AtomicUsize,
        last_request: Mutex<Option<ResolvedRequest>>,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior: Mutex::new(behavior),
                call_count: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn set_behavior(&self, behavior: Behavior) {
            *self.behavior.lock().unwrap() = behavior;
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChartProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_chart(
            &self,
            request: &ResolvedRequest,
        ) -> Result<YahooChartResponse, MarketDataError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());

            match &*self.behavior.lock().unwrap() {
                Behavior::Chart(json) => {
                    let data: YahooChartResponse = serde_json::from_str(json).unwrap();
                    if data.first_result().is_none() {
                        return Err(MarketDataError::NoData(request.provider_symbol.clone()));
                    }
                    Ok(data)
                }
                Behavior::Status(status) => Err(MarketDataError::Upstream { status: *status }),
            }
        }
    }

    fn service(behavior: Behavior) -> (QuoteService, Arc<MockProvider>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_717_600_000_000));
        let provider = Arc::new(MockProvider::new(behavior));
        let cache = Arc::new(QuoteCache::new(DEFAULT_CACHE_TTL, clock.clone()));
        let service = QuoteService::new(provider.clone(), cache, clock.clone());
        (service, provider, clock)
    }

    #[tokio::test]
    async fn test_miss_fetches_and_normalizes() {
        let (service, provider, _clock) = service(Behavior::Chart(CHART));

        let quote = service.get_quote("spx", "1mo").await.unwrap();
        assert_eq!(quote.symbol, "^GSPC");
        assert_eq!(quote.prices, vec![100.0, 110.0]);
        assert_eq!(quote.change, 10.0);
        assert_eq!(provider.calls(), 1);

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.provider_symbol, "^GSPC");
        assert_eq!(request.interval, "1d");
        assert_eq!(request.period_end, 1_717_600_000);
        assert_eq!(request.period_end - request.period_start, 2_592_000);
    }

    #[tokio::test]
    async fn test_hit_within_window_skips_provider() {
        let (service, provider, clock) = service(Behavior::Chart(CHART));

        let first = service.get_quote("SPX", "7d").await.unwrap();
        clock.advance(Duration::from_secs(9 * 60));
        let second = service.get_quote("spx", "7d").await.unwrap();

        assert_eq!(provider.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_expiry_triggers_exactly_one_refetch() {
        let (service, provider, clock) = service(Behavior::Chart(CHART));

        service.get_quote("SPX", "7d").await.unwrap();
        clock.advance(Duration::from_secs(10 * 60));
        service.get_quote("SPX", "7d").await.unwrap();
        service.get_quote("SPX", "7d").await.unwrap();

        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_ranges_cached_separately() {
        let (service, provider, _clock) = service(Behavior::Chart(CHART));

        service.get_quote("SPX", "7d").await.unwrap();
        service.get_quote("SPX", "1y").await.unwrap();
        assert_eq!(provider.calls(), 2);
        assert_eq!(service.cache().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let (service, provider, _clock) = service(Behavior::Status(503));

        let err = service.get_quote("SPX", "7d").await.unwrap_err();
        assert!(matches!(err, MarketDataError::Upstream { status: 503 }));
        assert!(service.cache().is_empty());

        provider.set_behavior(Behavior::Chart(CHART));
        let quote = service.get_quote("SPX", "7d").await.unwrap();
        assert_eq!(quote.current_price, 110.0);
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_result_is_no_data() {
        let (service, _provider, _clock) = service(Behavior::Chart(r#"{"chart":{"result":[]}}"#));

        let err = service.get_quote("ZZZZ", "7d").await.unwrap_err();
        assert!(matches!(err, MarketDataError::NoData(ref s) if s == "ZZZZ"));
        assert!(service.cache().is_empty());
    }

    #[tokio::test]
    async fn test_empty_series_is_not_cached() {
        let (service, _provider, _clock) = service(Behavior::Chart(
            r#"{"chart":{"result":[{"timestamp":[],"indicators":{"quote":[{"close":[]}]}}]}}"#,
        ));

        let err = service.get_quote("SPX", "decade").await.unwrap_err();
        assert!(matches!(err, MarketDataError::InsufficientData(_)));
        assert!(service.cache().is_empty());
    }
}
