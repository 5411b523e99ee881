use std::sync::Arc;

use papertrade_market_data::{
    Clock, QuoteCache, QuoteService, SystemClock, YahooChartProvider,
};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<QuoteService>,
}

impl AppState {
    pub fn new(quote_service: Arc<QuoteService>) -> Self {
        Self { quote_service }
    }
}

/// Initialize logging to stdout.
pub fn init_tracing() {
    init_tracing_with_writer(std::io::stdout);
}

/// Initialize logging to an arbitrary writer (the CGI adapter logs to stderr
/// because stdout carries the HTTP response).
pub fn init_tracing_with_writer<W>(writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let log_format = std::env::var("PT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(writer),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(writer),
            )
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let cache = Arc::new(
        QuoteCache::new(config.cache_ttl, clock.clone())
            .with_max_entries(config.cache_max_entries),
    );
    match config.cache_max_entries {
        Some(max) => tracing::info!(
            "Quote cache TTL {:?}, bounded to {} entries",
            config.cache_ttl,
            max
        ),
        None => tracing::info!("Quote cache TTL {:?}, unbounded", config.cache_ttl),
    }

    let provider = Arc::new(YahooChartProvider::with_base_url(
        config.yahoo_base_url.clone(),
    )?);
    tracing::info!("Chart provider base URL: {}", provider.base_url());

    let quote_service = Arc::new(QuoteService::new(provider, cache, clock));

    Ok(Arc::new(AppState::new(quote_service)))
}
