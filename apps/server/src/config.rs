use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use papertrade_market_data::{DEFAULT_CACHE_TTL, YAHOO_CHART_BASE_URL};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cache_ttl: Duration,
    /// `None` keeps the cache unbounded.
    pub cache_max_entries: Option<usize>,
    pub yahoo_base_url: String,
    /// Built front-end to serve for non-API paths, if any.
    pub static_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_max_entries: None,
            yahoo_base_url: YAHOO_CHART_BASE_URL.to_string(),
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match env_var("PT_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid PT_LISTEN_ADDR: {}", addr))?,
            None => defaults.listen_addr,
        };
        let cache_ttl = match env_var("PT_CACHE_TTL_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .with_context(|| format!("Invalid PT_CACHE_TTL_SECS: {}", secs))?,
            ),
            None => defaults.cache_ttl,
        };
        let cache_max_entries = match env_var("PT_CACHE_MAX_ENTRIES") {
            Some(n) => Some(
                n.parse()
                    .with_context(|| format!("Invalid PT_CACHE_MAX_ENTRIES: {}", n))?,
            ),
            None => defaults.cache_max_entries,
        };
        let yahoo_base_url = env_var("PT_YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url);
        let static_dir = env_var("PT_STATIC_DIR");

        Ok(Self {
            listen_addr,
            cache_ttl,
            cache_max_entries,
            yahoo_base_url,
            static_dir,
        })
    }
}

/// Read a variable, treating empty or whitespace-only values as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert!(config.cache_max_entries.is_none());
        assert_eq!(config.yahoo_base_url, "https://query1.finance.yahoo.com");
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_env_var_ignores_blank() {
        std::env::set_var("PT_TEST_BLANK_VALUE", "   ");
        assert!(env_var("PT_TEST_BLANK_VALUE").is_none());
        std::env::set_var("PT_TEST_BLANK_VALUE", " x ");
        assert_eq!(env_var("PT_TEST_BLANK_VALUE").as_deref(), Some("x"));
        std::env::remove_var("PT_TEST_BLANK_VALUE");
    }
}
