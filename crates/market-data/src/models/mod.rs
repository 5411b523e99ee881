//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderSymbol)
//! - `range` - Range tokens and their upstream interval/lookback (RangeSpec)
//! - `quote` - The normalized quote returned to clients (NormalizedQuote)

mod quote;
mod range;
mod types;

pub use quote::NormalizedQuote;
pub use range::{RangeSpec, DEFAULT_INTERVAL, DEFAULT_RANGE, RANGE_SPECS};
pub use types::ProviderSymbol;
