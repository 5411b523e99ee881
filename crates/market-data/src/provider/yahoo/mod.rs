//! Yahoo Finance chart provider.
//!
//! Fetches historical series from the v8 chart endpoint:
//!
//! ```text
//! GET {base}/v8/finance/chart/{symbol}?period1={start}&period2={end}&interval={interval}
//! ```
//!
//! Yahoo rejects requests carrying reqwest's default identification, so every
//! request is sent with a browser-like `User-Agent`.

mod models;

pub use models::{
    YahooChart, YahooChartError, YahooChartResponse, YahooChartResult, YahooIndicators,
    YahooQuoteIndicator,
};

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::provider::ChartProvider;
use crate::resolver::ResolvedRequest;

/// Production chart API host.
pub const YAHOO_CHART_BASE_URL: &str = "https://query1.finance.yahoo.com";

const PROVIDER_ID: &str = "YAHOO";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance chart provider.
pub struct YahooChartProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChartProvider {
    /// Create a provider talking to the production Yahoo host.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(YAHOO_CHART_BASE_URL)
    }

    /// Create a provider talking to another host (mirror, proxy or test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chart_url(&self, request: &ResolvedRequest) -> String {
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval={}",
            self.base_url,
            encode(&request.provider_symbol),
            request.period_start,
            request.period_end,
            request.interval
        )
    }
}

#[async_trait]
impl ChartProvider for YahooChartProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_chart(
        &self,
        request: &ResolvedRequest,
    ) -> Result<YahooChartResponse, MarketDataError> {
        let symbol = &request.provider_symbol;
        let url = self.chart_url(request);
        debug!(
            "Fetching Yahoo chart for {} ({} → {}, interval {})",
            symbol, request.period_start, request.period_end, request.interval
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                warn!("Yahoo chart request for {} failed: {}", symbol, e);
                MarketDataError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Yahoo chart request for {} returned status {}",
                symbol,
                status.as_u16()
            );
            return Err(MarketDataError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: YahooChartResponse =
            serde_json::from_str(&body).map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse chart response: {}", e),
            })?;

        if data.first_result().is_none() {
            if let Some(err) = data.chart.as_ref().and_then(|c| c.error.as_ref()) {
                debug!(
                    "Yahoo chart for {} has no result: {} {}",
                    symbol,
                    err.code.as_deref().unwrap_or("-"),
                    err.description.as_deref().unwrap_or("")
                );
            }
            return Err(MarketDataError::NoData(symbol.clone()));
        }

        Ok(data)
    }
}
