//! Bounded LRU memo table.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;

/// Cache statistics since creation or the last [`MemoCache::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Lookups served from a resident entry.
    pub hits: u64,
    /// Lookups that ran the compute closure.
    pub misses: u64,
    /// Maximum number of entries.
    pub capacity: usize,
    /// Current number of entries.
    pub size: usize,
}

/// A bounded memo table with least-recently-used eviction.
///
/// Each key owns a once-initialized slot. The map lock is held only to
/// find or create the slot, never while computing a value.
pub struct MemoCache<K, V> {
    entries: Mutex<LruCache<K, Arc<OnceLock<V>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Hash + Eq, V: Clone> MemoCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached value for `key`, running `compute` on a miss.
    ///
    /// A lookup marks the entry as most recently used. Inserting into a
    /// full cache evicts the least recently used entry.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let slot = {
            let mut entries = self.entries.lock();
            Arc::clone(entries.get_or_insert(key, || Arc::new(OnceLock::new())))
        };

        if let Some(value) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return value.clone();
        }

        let mut computed = false;
        let value = slot
            .get_or_init(|| {
                computed = true;
                compute()
            })
            .clone();

        let counter = if computed { &self.misses } else { &self.hits };
        counter.fetch_add(1, Ordering::Relaxed);
        value
    }

    /// Whether `key` is resident. Does not affect recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.lock().contains(key)
    }

    /// Removes all entries and resets statistics.
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current statistics.
    pub fn info(&self) -> CacheInfo {
        let entries = self.entries.lock();
        CacheInfo {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            capacity: entries.cap().get(),
            size: entries.len(),
        }
    }
}

impl<K: Hash + Eq, V> std::fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.lock();
        f.debug_struct("MemoCache")
            .field("capacity", &entries.cap())
            .field("size", &entries.len())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn cache(capacity: usize) -> MemoCache<String, usize> {
        MemoCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_hit_skips_compute() {
        let cache = cache(4);
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            7
        };

        assert_eq!(cache.get_or_compute("a".into(), compute), 7);
        assert_eq!(cache.get_or_compute("a".into(), || unreachable!()), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let info = cache.info();
        assert_eq!((info.hits, info.misses, info.size, info.capacity), (1, 1, 1, 4));
    }

    #[test]
    fn test_lru_eviction() {
        let cache = cache(2);
        cache.get_or_compute("a".into(), || 1);
        cache.get_or_compute("b".into(), || 2);
        // Touch "a" so "b" becomes least recently used.
        cache.get_or_compute("a".into(), || unreachable!());
        cache.get_or_compute("c".into(), || 3);

        assert!(cache.contains(&"a".to_string()));
        assert!(!cache.contains(&"b".to_string()));
        assert!(cache.contains(&"c".to_string()));
        assert_eq!(cache.info().size, 2);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let cache = cache(4);
        cache.get_or_compute("a".into(), || 1);
        cache.clear();

        let info = cache.info();
        assert_eq!((info.hits, info.misses, info.size), (0, 0, 0));
        assert_eq!(cache.get_or_compute("a".into(), || 2), 2);
        assert_eq!(cache.info().misses, 1);
    }

    #[test]
    fn test_concurrent_same_key_computes_once() {
        let cache = cache(8);
        let calls = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let value = cache.get_or_compute("shared".into(), || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        std::thread::sleep(Duration::from_millis(20));
                        42
                    });
                    assert_eq!(value, 42);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let info = cache.info();
        assert_eq!(info.misses, 1);
        assert_eq!(info.hits, 7);
    }

    #[test]
    fn test_concurrent_distinct_keys() {
        let cache = cache(8);

        std::thread::scope(|s| {
            for i in 0..4usize {
                let cache = &cache;
                s.spawn(move || {
                    assert_eq!(cache.get_or_compute(format!("k{i}"), || i * 10), i * 10);
                });
            }
        });

        let info = cache.info();
        assert_eq!(info.misses, 4);
        assert_eq!(info.size, 4);
    }
}
