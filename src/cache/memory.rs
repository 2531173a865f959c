// ABOUTME: In-memory LRU cache for ranked recommendation lists
// ABOUTME: Memoizes engine output per query over an immutable dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::{RecommendationQuery, Recommendations};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Hit and miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to be computed
    pub misses: u64,
    /// Entries currently held
    pub entries: usize,
    /// Maximum entries
    pub capacity: usize,
}

/// LRU cache of recommendation results
///
/// The dataset never changes after load, so entries have no TTL; the only
/// eviction is least-recently-used once `capacity` is reached.
#[derive(Debug)]
pub struct RecommendationCache {
    store: Mutex<LruCache<RecommendationQuery, Arc<Recommendations>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RecommendationCache {
    /// Create a cache holding at most `capacity` results
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache, or `None` when `capacity` is zero
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        NonZeroUsize::new(capacity).map(Self::new)
    }

    /// Cached result for a query, computing and storing it on a miss
    ///
    /// The lock is not held while `compute` runs; two threads missing on the
    /// same query both compute it and the later insert wins, which is
    /// harmless because results are deterministic.
    pub fn get_or_insert_with<F>(&self, query: &RecommendationQuery, compute: F) -> Arc<Recommendations>
    where
        F: FnOnce() -> Recommendations,
    {
        if let Some(hit) = self.lock().get(query).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let computed = Arc::new(compute());
        self.lock().put(query.clone(), Arc::clone(&computed));
        computed
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let store = self.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: store.len(),
            capacity: store.cap().get(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<RecommendationQuery, Arc<Recommendations>>> {
        // Entries are whole values, so a poisoned lock still guards consistent data
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
