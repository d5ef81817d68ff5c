//! Result caching for pure functions.
//!
//! A [`Memoized`] value owns both the wrapped function and its cache, so
//! two memoized functions never observe each other's entries and the cache
//! lives exactly as long as the wrapper.
//!
//! Failures are never cached: when the wrapped function returns `Err`, the
//! error goes straight back to the caller and the next call with the same
//! arguments runs the function again.
//!
//! The cache lock is released while the wrapped function runs. Two threads
//! asking for the same fresh key may therefore both compute it; the first
//! stored value wins and is what every caller receives.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;
use tracing::trace;

use crate::metrics::{CacheCounters, CacheStats};

/// A function wrapped with an unbounded, per-wrapper result cache.
///
/// `A` is the argument tuple (use `(A1, A2)` for several arguments) and `R`
/// the cached result. The wrapped function receives the arguments by
/// reference and returns `Result<R, E>`.
pub struct Memoized<A, R, F> {
    function: F,
    cache: Mutex<HashMap<A, R>>,
    counters: CacheCounters,
    name: Option<String>,
}

/// Wrap a fallible function with a result cache.
pub fn memoize<A, R, E, F>(function: F) -> Memoized<A, R, F>
where
    A: Eq + Hash,
    F: Fn(&A) -> Result<R, E>,
{
    Memoized::new(function)
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash,
{
    /// Wrap `function`; it must return `Result<R, E>`.
    #[must_use]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: Mutex::new(HashMap::new()),
            counters: CacheCounters::new(),
            name: None,
        }
    }

    /// Label used in trace events.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Invoke the function, serving a cached result when `args` was seen before.
    ///
    /// # Errors
    /// Returns whatever error the wrapped function returns. Errors are not
    /// cached.
    pub fn call<E>(&self, args: A) -> Result<R, E>
    where
        F: Fn(&A) -> Result<R, E>,
        R: Clone,
    {
        if let Some(hit) = self.cache.lock().get(&args) {
            self.counters.record_hit();
            trace!(function = self.label(), "memoize hit");
            return Ok(hit.clone());
        }

        match (self.function)(&args) {
            Ok(value) => {
                self.counters.record_miss();
                trace!(function = self.label(), "memoize miss, result stored");
                let mut cache = self.cache.lock();
                Ok(cache.entry(args).or_insert(value).clone())
            }
            Err(err) => {
                self.counters.record_failure();
                trace!(function = self.label(), "memoize miss, computation failed");
                Err(err)
            }
        }
    }

    /// Whether a result for `args` is cached.
    pub fn contains(&self, args: &A) -> bool {
        self.cache.lock().contains_key(args)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drop every cached result. Counters are kept.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    /// Hit / miss / failure counts since construction or the last
    /// [`Memoized::reset_stats`].
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    /// Zero the hit / miss / failure counts. Cached results are kept.
    pub fn reset_stats(&self) {
        self.counters.reset();
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("anonymous")
    }
}

impl<A, R> Memoized<A, R, ()> {
    /// Wrap a function that cannot fail; call it through [`Memoized::get`].
    #[must_use]
    pub fn infallible<G>(function: G) -> Memoized<A, R, impl Fn(&A) -> Result<R, Infallible>>
    where
        A: Eq + Hash,
        G: Fn(&A) -> R,
    {
        Memoized::new(move |args: &A| Ok(function(args)))
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash,
    R: Clone,
    F: Fn(&A) -> Result<R, Infallible>,
{
    /// Invoke an infallible memoized function.
    pub fn get(&self, args: A) -> R {
        match self.call(args) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("cached", &self.cache.lock().len())
            .field("stats", &self.counters.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_call_is_served_from_cache() {
        let calls = Cell::new(0);
        let square = memoize(|n: &u64| {
            calls.set(calls.get() + 1);
            Ok::<_, String>(n * n)
        });

        assert_eq!(square.call(12), Ok(144));
        assert_eq!(square.call(12), Ok(144));
        assert_eq!(calls.get(), 1);
        assert_eq!(square.stats(), CacheStats { hits: 1, misses: 1, failures: 0 });
    }

    #[test]
    fn distinct_arguments_are_cached_separately() {
        let calls = Cell::new(0);
        let join = memoize(|(a, b): &(String, u32)| {
            calls.set(calls.get() + 1);
            Ok::<_, String>(format!("{a}:{b}"))
        });

        assert_eq!(join.call(("evar".to_string(), 1)).as_deref(), Ok("evar:1"));
        assert_eq!(join.call(("evar".to_string(), 2)).as_deref(), Ok("evar:2"));
        assert_eq!(join.call(("evar".to_string(), 1)).as_deref(), Ok("evar:1"));
        assert_eq!(calls.get(), 2);
        assert_eq!(join.len(), 2);
    }

    #[test]
    fn failures_are_retried_not_cached() {
        let calls = Cell::new(0);
        let flaky = memoize(|n: &u32| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 { Err("transient") } else { Ok(*n + 1) }
        });

        assert_eq!(flaky.call(1), Err("transient"));
        assert!(!flaky.contains(&1));
        assert_eq!(flaky.call(1), Ok(2));
        assert_eq!(flaky.call(1), Ok(2));
        assert_eq!(calls.get(), 2);
        assert_eq!(flaky.stats().failures, 1);
    }

    #[test]
    fn infallible_wrapper_returns_plain_values() {
        let calls = Cell::new(0);
        let double = Memoized::infallible(|n: &i32| {
            calls.set(calls.get() + 1);
            n * 2
        });

        assert_eq!(double.get(21), 42);
        assert_eq!(double.get(21), 42);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clear_forces_recomputation() {
        let calls = Cell::new(0);
        let ident = Memoized::infallible(|n: &u8| {
            calls.set(calls.get() + 1);
            *n
        });

        ident.get(3);
        ident.clear();
        assert!(ident.is_empty());
        ident.get(3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn reset_stats_keeps_cached_results() {
        let calls = Cell::new(0);
        let ident = Memoized::infallible(|n: &u8| {
            calls.set(calls.get() + 1);
            *n
        });

        ident.get(4);
        ident.get(4);
        ident.reset_stats();
        assert_eq!(ident.stats(), CacheStats::default());
        assert_eq!(ident.get(4), 4);
        assert_eq!(ident.stats(), CacheStats { hits: 1, misses: 0, failures: 0 });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn wrappers_do_not_share_caches() {
        let first = Memoized::infallible(|n: &u8| u32::from(*n));
        let second = Memoized::infallible(|n: &u8| u32::from(*n) * 10);

        assert_eq!(first.get(1), 1);
        assert_eq!(second.get(1), 10);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn debug_shows_name_and_size() {
        let named = Memoized::infallible(|n: &u8| *n).with_name("report_suites");
        named.get(1);
        let rendered = format!("{named:?}");
        assert!(rendered.contains("report_suites"));
        assert!(rendered.contains("cached: 1"));
    }
}
