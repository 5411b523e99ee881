//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every failure of the quote pipeline: talking to
//! the upstream chart API, validating its payload, and normalizing the series.
//! Callers at the HTTP boundary use [`MarketDataError::is_no_data`] to tell the
//! "nothing to show" failures apart from genuine upstream faults.

use thiserror::Error;

/// Errors that can occur while fetching or normalizing market data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The upstream provider answered with a non-success HTTP status.
    #[error("Yahoo Finance API error: {status}")]
    Upstream {
        /// HTTP status code returned by the provider
        status: u16,
    },

    /// The upstream response was well formed but carried no result entries.
    /// Usually the symbol is unknown to the provider.
    #[error("No data found for symbol: {0}")]
    NoData(String),

    /// A result entry was present but no usable close prices survived
    /// normalization (all gaps, or an empty window).
    #[error("No usable prices for symbol: {0}")]
    InsufficientData(String),

    /// The upstream body could not be decoded or contained values we
    /// cannot represent.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the payload
        provider: String,
        /// Description of what was wrong with it
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the failure means "no series for this request"
    /// rather than a fault talking to the provider.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData(_) | Self::InsufficientData(_))
    }
}
