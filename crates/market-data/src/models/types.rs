/// Provider-specific symbol (e.g. "^GSPC", "BTC-USD")
pub type ProviderSymbol = String;
