//! Public alias → Yahoo symbol table.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::ProviderSymbol;

lazy_static! {
    /// Uppercase client alias → Yahoo Finance symbol.
    pub static ref SYMBOL_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        // Indices
        ("SPX", "^GSPC"),
        ("IXIC", "^IXIC"),
        ("DJI", "^DJI"),
        // Crypto
        ("BTCUSD", "BTC-USD"),
        ("ETHUSD", "ETH-USD"),
        ("SOLUSD", "SOL-USD"),
        // Commodities (front-month futures)
        ("XAUUSD", "GC=F"),
        ("XAGUSD", "SI=F"),
        ("WTI", "CL=F"),
        // FX
        ("EURUSD", "EURUSD=X"),
        ("GBPUSD", "GBPUSD=X"),
        ("USDJPY", "JPY=X"),
        ("USDINR", "INR=X"),
        // Equities
        ("AAPL", "AAPL"),
        ("MSFT", "MSFT"),
        ("AMZN", "AMZN"),
        ("TSLA", "TSLA"),
    ]);
}

/// Map a client alias to the provider symbol.
///
/// Lookup is case-insensitive; unmapped aliases are returned uppercased.
pub fn resolve_symbol(alias: &str) -> ProviderSymbol {
    let upper = alias.to_uppercase();
    match SYMBOL_MAP.get(upper.as_str()) {
        Some(mapped) => (*mapped).to_string(),
        None => upper,
    }
}
