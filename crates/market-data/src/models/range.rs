//! Range tokens selectable by clients.

const DAY_SECS: i64 = 24 * 60 * 60;

/// Range used when the client does not send one.
pub const DEFAULT_RANGE: &str = "7d";

/// Upstream interval used for unrecognized range tokens.
pub const DEFAULT_INTERVAL: &str = "1d";

/// Upstream sampling interval and lookback window for a range token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeSpec {
    /// Client-facing token (e.g. "1mo")
    pub token: &'static str,
    /// Upstream interval (e.g. "1d", "1wk")
    pub interval: &'static str,
    /// Lookback window in seconds
    pub lookback_secs: i64,
}

/// The five supported range tokens.
pub const RANGE_SPECS: [RangeSpec; 5] = [
    RangeSpec {
        token: "7d",
        interval: "1d",
        lookback_secs: 7 * DAY_SECS,
    },
    RangeSpec {
        token: "1mo",
        interval: "1d",
        lookback_secs: 30 * DAY_SECS,
    },
    RangeSpec {
        token: "3mo",
        interval: "1d",
        lookback_secs: 90 * DAY_SECS,
    },
    RangeSpec {
        token: "6mo",
        interval: "1wk",
        lookback_secs: 180 * DAY_SECS,
    },
    RangeSpec {
        token: "1y",
        interval: "1wk",
        lookback_secs: 365 * DAY_SECS,
    },
];

impl RangeSpec {
    /// Look up a range token. Matching is exact (tokens are lowercase).
    pub fn lookup(token: &str) -> Option<&'static RangeSpec> {
        RANGE_SPECS.iter().find(|spec| spec.token == token)
    }

    /// Comma-separated list of supported tokens, for error messages.
    pub fn supported_tokens() -> String {
        RANGE_SPECS
            .iter()
            .map(|spec| spec.token)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
