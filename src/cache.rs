//! In-memory cache of resolved prompts.
//!
//! The cache is an explicit value owned by the caller and is keyed by seed URL,
//! which carries both the generator base URL and the trimmed prompt, so one cache
//! can serve several generator configurations. Nothing is shared between caches. Entries expire after a fixed TTL and the
//! oldest entry is evicted when the cache is full.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use tokio::time::Instant;
use url::Url;

use crate::config::{CACHE_MAX_ENTRIES, CACHE_TTL_SECS};
use crate::ResolvedImage;

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ResolvedImage,
    cached_at: Instant,
}

/// Maps seed URLs to previously resolved images.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(CACHE_TTL_SECS), CACHE_MAX_ENTRIES)
    }
}

impl ResolutionCache {
    /// Creates a cache holding at most `max_entries` (minimum 1) for `ttl` each.
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the cached result for the chain starting at `seed_url`, dropping the
    /// entry if it has expired.
    pub fn get(&mut self, seed_url: &Url) -> Option<ResolvedImage> {
        let key = cache_key(seed_url);
        let entry = self.entries.get(&key)?;
        if entry.cached_at.elapsed() >= self.ttl {
            debug!("Cache entry for '{}' expired", key);
            self.entries.remove(&key);
            return None;
        }
        Some(entry.image.clone())
    }

    /// Stores `image` under its seed URL, evicting expired entries and then the
    /// oldest one if the cache is full.
    pub fn insert(&mut self, image: ResolvedImage) {
        let key = cache_key(&image.seed_url);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.purge_expired();
            if self.entries.len() >= self.max_entries {
                self.evict_oldest();
            }
        }
        self.entries.insert(
            key,
            CacheEntry {
                image,
                cached_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.cached_at.elapsed() < ttl);
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.cached_at)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            debug!("Cache full, evicting '{}'", key);
            self.entries.remove(&key);
        }
    }
}

fn cache_key(seed_url: &Url) -> String {
    seed_url.as_str().to_string()
}
