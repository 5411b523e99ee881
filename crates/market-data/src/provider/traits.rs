//! Chart provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::resolver::ResolvedRequest;

use super::yahoo::YahooChartResponse;

/// Source of historical price series.
///
/// Implementations perform exactly one upstream call per invocation: no
/// retries, no circuit breaking. The returned payload is guaranteed to hold
/// at least one result entry; an empty result set is reported as
/// [`MarketDataError::NoData`].
#[async_trait]
pub trait ChartProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the chart for `request.provider_symbol` over
    /// `[request.period_start, request.period_end]` sampled at
    /// `request.interval`.
    async fn fetch_chart(
        &self,
        request: &ResolvedRequest,
    ) -> Result<YahooChartResponse, MarketDataError>;
}
