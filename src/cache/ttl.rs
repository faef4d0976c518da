// ABOUTME: Concurrency-safe key/value cache with fixed time-to-live and bounded capacity
// ABOUTME: Backed by an LRU map behind a tokio mutex; expired entries are never served
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use std::hash::Hash;
use std::time::Duration;

use lru::LruCache;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Cached value with its insertion time
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// TTL cache shared by concurrent tool invocations.
///
/// The lock is never held across the compute future in
/// [`TtlCache::get_or_try_compute`], so two callers missing the same key may
/// both compute; the last insert wins.
#[derive(Debug)]
pub struct TtlCache<K: Hash + Eq, V> {
    name: &'static str,
    ttl: Duration,
    capacity: usize,
    entries: Mutex<LruCache<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries for `ttl` each
    #[must_use]
    pub fn new(name: &'static str, ttl: Duration, capacity: usize) -> Self {
        Self {
            name,
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(LruCache::unbounded()),
        }
    }

    /// Cache name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Configured time-to-live
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Live value for `key`; an expired entry is dropped and reported as a miss
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().await;
        let expired = entries
            .peek(key)
            .map(|entry| entry.inserted_at.elapsed() >= self.ttl)?;
        if expired {
            entries.pop(key);
            debug!(cache = self.name, "Cache entry expired");
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store `value`, evicting the least recently used entry when full
    pub async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.lock().await;
        entries.put(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
        while entries.len() > self.capacity {
            entries.pop_lru();
        }
    }

    /// Cached value for `key`, or the result of `compute` stored for next time.
    ///
    /// Failures from `compute` are returned as-is and not cached.
    ///
    /// # Errors
    ///
    /// Returns whatever error `compute` produced on a cache miss
    pub async fn get_or_try_compute<F, Fut, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            debug!(cache = self.name, "Cache hit");
            return Ok(value);
        }

        debug!(cache = self.name, "Cache miss, computing value");
        let value = compute().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }

    /// Drop one entry, returning whether it was present
    pub async fn invalidate(&self, key: &K) -> bool {
        self.entries.lock().await.pop(key).is_some()
    }

    /// Drop every entry, returning how many were removed
    pub async fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let removed = entries.len();
        entries.clear();
        debug!(cache = self.name, removed, "Cache invalidated");
        removed
    }

    /// Stored entries, including ones that expired but were not yet read
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// True when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
