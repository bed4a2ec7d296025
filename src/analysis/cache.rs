//! Bounded result cache
//!
//! Maps a canonical input key to the last computed [`DetectionResult`]. Eviction is
//! insertion-order FIFO: when full, the oldest inserted key goes first regardless
//! of how recently it was read. Map and order queue are only touched under one
//! lock, so concurrent writers cannot desynchronize the bookkeeping.

use super::result::DetectionResult;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Cache occupancy and hit counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently stored
    pub size: usize,
    /// Maximum entries
    pub capacity: usize,
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, DetectionResult>,
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
}

/// FIFO-bounded cache of detection results
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` entries (0 disables caching)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Look up a cached result
    pub fn get(&self, key: &str) -> Option<DetectionResult> {
        let mut inner = self.inner.lock();
        let found = inner.entries.get(key).cloned();
        match found {
            Some(result) => {
                inner.hits += 1;
                Some(result)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Store a result, evicting the oldest entry if the cache is full.
    ///
    /// Re-inserting an existing key replaces the value but keeps its original
    /// insertion position.
    pub fn put(&self, key: String, result: DetectionResult) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.lock();
        if let Some(existing) = inner.entries.get_mut(&key) {
            *existing = result;
            return;
        }

        while inner.order.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    log::trace!("Evicting cached result for [{}]", oldest);
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(key, result);
    }

    /// Remove every entry and reset counters
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
        inner.hits = 0;
        inner.misses = 0;
    }

    /// Current entry count
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured maximum entry count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of size, capacity and counters
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            size: inner.entries.len(),
            capacity: self.capacity,
            hits: inner.hits,
            misses: inner.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(reasoning: &str) -> DetectionResult {
        DetectionResult {
            reasoning: reasoning.to_string(),
            ..DetectionResult::empty()
        }
    }

    #[test]
    fn test_put_get() {
        let cache = ResultCache::new(4);
        cache.put("C,E,G".to_string(), result("a"));
        assert_eq!(cache.get("C,E,G").unwrap().reasoning, "a");
        assert!(cache.get("D,F,A").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 4);
    }

    #[test]
    fn test_fifo_eviction_ignores_reads() {
        let cache = ResultCache::new(2);
        cache.put("a".to_string(), result("a"));
        cache.put("b".to_string(), result("b"));

        // Reading "a" must not protect it: eviction is by insertion order
        assert!(cache.get("a").is_some());

        cache.put("c".to_string(), result("c"));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let cache = ResultCache::new(2);
        cache.put("a".to_string(), result("a1"));
        cache.put("b".to_string(), result("b"));
        cache.put("a".to_string(), result("a2"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").unwrap().reasoning, "a2");

        cache.put("c".to_string(), result("c"));
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn test_clear() {
        let cache = ResultCache::new(3);
        cache.put("a".to_string(), result("a"));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_zero_capacity_disables() {
        let cache = ResultCache::new(0);
        cache.put("a".to_string(), result("a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_puts_keep_bookkeeping_consistent() {
        let cache = ResultCache::new(8);
        std::thread::scope(|s| {
            for t in 0..4 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..50 {
                        cache.put(format!("{}-{}", t, i % 12), result("x"));
                    }
                });
            }
        });
        let inner = cache.inner.lock();
        assert_eq!(inner.entries.len(), inner.order.len());
        assert!(inner.entries.len() <= 8);
    }
}
