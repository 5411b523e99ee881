//! Symbol and range resolution for the upstream chart provider.
//!
//! Turns a client request `(alias, range)` into everything the fetcher needs:
//!
//! ```text
//!   ("spx", "1mo")
//!        │
//!        ├── alias table ──────────► "^GSPC"
//!        └── range table + clock ──► interval "1d", period1, period2
//! ```
//!
//! Resolution is pure and never fails. Aliases missing from the table pass
//! through uppercased; whether the upstream knows them is only discovered at
//! fetch time. Range tokens missing from the table fall back to
//! [`DEFAULT_INTERVAL`] with a zero-width window, which callers can detect via
//! [`ResolvedRequest::is_degenerate`].

mod symbol_map;

pub use symbol_map::{resolve_symbol, SYMBOL_MAP};

use crate::models::{ProviderSymbol, RangeSpec, DEFAULT_INTERVAL};

/// Upstream request parameters for one client request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedRequest {
    /// Symbol in the provider's syntax
    pub provider_symbol: ProviderSymbol,
    /// Upstream sampling interval
    pub interval: &'static str,
    /// Window start, Unix epoch seconds
    pub period_start: i64,
    /// Window end, Unix epoch seconds
    pub period_end: i64,
}

impl ResolvedRequest {
    /// True when the window has zero width (unrecognized range token).
    pub fn is_degenerate(&self) -> bool {
        self.period_start >= self.period_end
    }
}

/// Resolve an alias and range token against the static tables.
///
/// `now_secs` becomes `period_end`; `period_start` is `now_secs` minus the
/// range's lookback, or `now_secs` itself for an unknown range.
pub fn resolve(alias: &str, range: &str, now_secs: i64) -> ResolvedRequest {
    let spec = RangeSpec::lookup(range);
    let interval = spec.map(|s| s.interval).unwrap_or(DEFAULT_INTERVAL);
    let lookback = spec.map(|s| s.lookback_secs).unwrap_or(0);

    ResolvedRequest {
        provider_symbol: resolve_symbol(alias),
        interval,
        period_start: now_secs - lookback,
        period_end: now_secs,
    }
}
