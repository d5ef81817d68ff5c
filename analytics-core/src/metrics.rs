//! Cache instrumentation for memoized functions.
//!
//! Counters are lock-free `AtomicU64`s incremented on the call path and
//! read as a [`CacheStats`] snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters owned by a single memoized function.
#[derive(Debug)]
pub struct CacheCounters {
    /// Calls answered from the cache.
    pub hits: AtomicU64,
    /// Calls that ran the wrapped function and stored its result.
    pub misses: AtomicU64,
    /// Calls where the wrapped function returned an error.
    pub failures: AtomicU64,
}

impl CacheCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot all counters.
    #[must_use]
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }
}

impl Default for CacheCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of cache counters at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that computed and stored a result.
    pub misses: u64,
    /// Calls whose computation failed.
    pub failures: u64,
}
