//! Papertrade Market Data Crate
//!
//! Cache-fronted retrieval of historical price series for the Papertrade
//! market endpoint.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   QuoteService   | --> |    QuoteCache    |  (symbol, range) → quote, TTL
//! +------------------+     +------------------+
//!          | miss
//!          v
//! +------------------+
//! |     Resolver     |  alias → provider symbol, range → interval + window
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  ChartProvider   |  Yahoo Finance v8 chart API
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Normalizer    |  drop gaps, ISO dates, change / changePercent
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteService`] - Orchestrates cache, resolver, provider and normalizer
//! - [`QuoteCache`] - Time-expiring quote store with injectable [`Clock`]
//! - [`NormalizedQuote`] - The payload stored in the cache and returned to clients
//! - [`RangeSpec`] - Supported range tokens with interval and lookback
//! - [`MarketDataError`] - Failures of the pipeline

pub mod cache;
pub mod clock;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod provider;
pub mod resolver;
pub mod service;

pub use cache::{QuoteCache, DEFAULT_CACHE_TTL};
pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::MarketDataError;
pub use models::{NormalizedQuote, ProviderSymbol, RangeSpec, DEFAULT_INTERVAL, DEFAULT_RANGE};
pub use provider::yahoo::{YahooChartProvider, YahooChartResponse, YAHOO_CHART_BASE_URL};
pub use provider::ChartProvider;
pub use resolver::{resolve, resolve_symbol, ResolvedRequest};
pub use service::QuoteService;
