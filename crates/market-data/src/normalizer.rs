//! Turns an upstream chart payload into a [`NormalizedQuote`].
//!
//! Indices whose close price is `null` (or missing because the close array is
//! shorter than the timestamp array) are dropped together with their
//! timestamp, so the output is gap-free but not necessarily contiguous in
//! time. Summary statistics are taken from the first and last retained
//! points, not from the edges of the requested window.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::MarketDataError;
use crate::models::NormalizedQuote;
use crate::provider::yahoo::YahooChartResponse;

/// Normalize the first result entry of `response` for `symbol`.
///
/// Fails with [`MarketDataError::NoData`] when there is no result entry and
/// with [`MarketDataError::InsufficientData`] when no close price survives
/// gap filtering.
pub fn normalize(
    symbol: &str,
    response: &YahooChartResponse,
) -> Result<NormalizedQuote, MarketDataError> {
    let result = response
        .first_result()
        .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))?;

    let timestamps = result.timestamps();
    let closes = result.closes();

    let mut dates = Vec::with_capacity(timestamps.len());
    let mut prices = Vec::with_capacity(timestamps.len());

    for (i, ts) in timestamps.iter().enumerate() {
        if let Some(Some(close)) = closes.get(i) {
            dates.push(format_timestamp(*ts)?);
            prices.push(*close);
        }
    }

    summarize(symbol, dates, prices)
}

/// Build the quote and its derived statistics from an aligned series.
pub fn summarize(
    symbol: &str,
    dates: Vec<String>,
    prices: Vec<f64>,
) -> Result<NormalizedQuote, MarketDataError> {
    let (previous_price, current_price) = match (prices.first(), prices.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(MarketDataError::InsufficientData(symbol.to_string())),
    };

    let change = current_price - previous_price;
    // JSON has no representation for infinities
    let change_percent = if previous_price == 0.0 {
        0.0
    } else {
        change / previous_price * 100.0
    };

    Ok(NormalizedQuote {
        symbol: symbol.to_string(),
        dates,
        prices,
        current_price,
        previous_price,
        change,
        change_percent,
    })
}

/// Epoch seconds → `YYYY-MM-DDTHH:MM:SS.sssZ`.
fn format_timestamp(epoch_secs: i64) -> Result<String, MarketDataError> {
    DateTime::<Utc>::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| MarketDataError::InvalidResponse {
            provider: "YAHOO".to_string(),
            message: format!("Invalid timestamp: {}", epoch_secs),
        })
}
