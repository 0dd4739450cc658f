//! Time-bounded memoization of remote listings and file bodies.
//!
//! Entries expire after a fixed TTL. Expiry is checked lazily on read; there
//! is no size bound and no eviction sweep. A refreshed fetch replaces the
//! whole entry, entries are never mutated in place.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::config::archive::ROOT_CACHE_KEY;
use crate::core::clock::Clock;
use crate::models::TreeEntry;

/// Cached value with the time it was stored.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: f64,
}

/// Keyed cache with lazy TTL expiry.
pub struct TtlCache<T> {
    entries: RefCell<HashMap<String, CacheEntry<T>>>,
    ttl_ms: f64,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            ttl_ms,
        }
    }

    /// Fresh value for `key` at time `now`, if any.
    pub fn get(&self, key: &str, now: f64) -> Option<T> {
        self.entries
            .borrow()
            .get(key)
            .filter(|entry| now - entry.timestamp < self.ttl_ms)
            .map(|entry| entry.data.clone())
    }

    /// Store `data` under `key`, replacing any previous entry.
    pub fn insert(&self, key: &str, data: T, now: f64) {
        self.entries.borrow_mut().insert(
            key.to_string(),
            CacheEntry {
                data,
                timestamp: now,
            },
        );
    }

    /// Return the cached value, or run `fetch` and cache its success.
    ///
    /// Failed fetches are not cached. No borrow is held across the fetch.
    pub async fn get_or_fetch<C, E, F, Fut>(&self, key: &str, clock: &C, fetch: F) -> Result<T, E>
    where
        C: Clock + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get(key, clock.now_ms()) {
            return Ok(hit);
        }

        let data = fetch().await?;
        self.insert(key, data.clone(), clock.now_ms());
        Ok(data)
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// The navigator's path cache: one map for listings, one for file bodies.
pub struct ArchiveCache {
    pub listings: TtlCache<Arc<[TreeEntry]>>,
    pub files: TtlCache<Arc<str>>,
}

impl ArchiveCache {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            listings: TtlCache::new(ttl_ms),
            files: TtlCache::new(ttl_ms),
        }
    }

    /// Listing cache key for a directory path; the root uses a sentinel.
    pub fn listing_key(path: &str) -> &str {
        if path.is_empty() { ROOT_CACHE_KEY } else { path }
    }

    /// Clear both maps (manual cache busting).
    pub fn invalidate_all(&self) {
        self.listings.clear();
        self.files.clear();
        log::info!("Cache cleared");
    }
}
