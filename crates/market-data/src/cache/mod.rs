//! Time-expiring in-memory cache for normalized quotes.
//!
//! Entries are keyed by `"{symbol}-{range}"` and are valid for a fixed TTL
//! from the moment they were stored. Staleness is checked on read; nothing
//! sweeps the map in the background. A stale entry stays in place until the
//! next successful fetch for the same key overwrites it.
//!
//! The cache is unbounded unless a maximum entry count is configured, in which
//! case inserting a new key into a full cache evicts the least recently
//! accessed entry.
//!
//! The cache is in-memory and resets on process restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};

use crate::clock::Clock;
use crate::models::NormalizedQuote;

/// Default time-to-live for cached quotes (10 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

#[derive(Debug)]
struct CacheEntry {
    payload: Arc<NormalizedQuote>,
    fetched_at_ms: i64,
    last_access_ms: i64,
}

/// Thread-safe quote cache with an injected clock.
pub struct QuoteCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl_ms: i64,
    max_entries: Option<usize>,
    clock: Arc<dyn Clock>,
}

impl QuoteCache {
    /// Create an unbounded cache with the given TTL.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl_ms: ttl.as_millis() as i64,
            max_entries: None,
            clock,
        }
    }

    /// Bound the cache to `max_entries`, evicting least recently used keys.
    /// `None` or `Some(0)` leaves it unbounded.
    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries.filter(|n| *n > 0);
        self
    }

    fn cache_key(symbol: &str, range: &str) -> String {
        format!("{}-{}", symbol, range)
    }

    /// Lock the entries mutex, recovering from poison if necessary.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Quote cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Return the cached quote if it was stored less than one TTL ago.
    pub fn get(&self, symbol: &str, range: &str) -> Option<Arc<NormalizedQuote>> {
        let key = Self::cache_key(symbol, range);
        let now = self.clock.now_millis();
        let mut entries = self.lock_entries();

        let entry = entries.get_mut(&key)?;
        let age = now - entry.fetched_at_ms;
        if age < self.ttl_ms {
            entry.last_access_ms = now;
            debug!("Quote cache hit for {} (age {} ms)", key, age);
            Some(Arc::clone(&entry.payload))
        } else {
            debug!("Quote cache entry for {} is stale (age {} ms)", key, age);
            None
        }
    }

    /// Store or overwrite the quote for `(symbol, range)`, stamped with the
    /// current time.
    pub fn put(&self, symbol: &str, range: &str, payload: Arc<NormalizedQuote>) {
        let key = Self::cache_key(symbol, range);
        let now = self.clock.now_millis();
        let mut entries = self.lock_entries();

        if let Some(max) = self.max_entries {
            if !entries.contains_key(&key) && entries.len() >= max {
                Self::evict_lru(&mut entries);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                payload,
                fetched_at_ms: now,
                last_access_ms: now,
            },
        );
    }

    fn evict_lru(entries: &mut HashMap<String, CacheEntry>) {
        let oldest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access_ms)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            debug!("Evicting least recently used quote cache entry {}", key);
            entries.remove(&key);
        }
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms as u64)
    }
}
