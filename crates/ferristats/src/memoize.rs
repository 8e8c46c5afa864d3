// =============================================================================
// Memoization
// =============================================================================
//
// Caching wrappers for pure functions. The special functions in this crate
// are cheap enough to recompute, but callers that sweep the same parameters
// repeatedly (tabulating a distribution over a grid, say) can wrap the hot
// function once and keep the transparent call shape.
//
// `Memoized` is the single-threaded wrapper: one mutable value owning the
// function and its cache. `SyncMemoized` shares a cache across threads
// behind a mutex; the lock is held across the underlying call so each
// distinct argument is computed exactly once even under contention.
//
// f64 is not `Eq`/`Hash`, so float arguments go through `FloatKey`, which
// keys on the exact bit pattern. That makes NaN equal to itself and keeps
// 0.0 and -0.0 distinct, which is the right behavior for a cache: identical
// bits in, identical result out.
//
// Both wrappers count hits and misses so callers can verify the cache is
// actually earning its memory.
//
// =============================================================================

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// A function paired with a cache of its previous results.
///
/// The wrapped function is only invoked for arguments not seen before;
/// repeated arguments are served from the cache.
pub struct Memoized<K, V, F> {
    func: F,
    cache: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&K) -> V,
{
    pub fn new(func: F) -> Self {
        Memoized {
            func,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Looks `arg` up in the cache, invoking the wrapped function on a miss.
    pub fn call(&mut self, arg: K) -> V {
        if let Some(value) = self.cache.get(&arg).cloned() {
            self.hits += 1;
            return value;
        }
        self.misses += 1;
        let value = (self.func)(&arg);
        self.cache.insert(arg, value.clone());
        value
    }

    /// Calls served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Calls that reached the wrapped function.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops all cached results and resets the hit/miss counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// An f64 made usable as a cache key by comparing exact bit patterns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FloatKey(u64);

impl FloatKey {
    /// The f64 this key was built from.
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for FloatKey {
    fn from(x: f64) -> Self {
        FloatKey(x.to_bits())
    }
}

struct CacheState<K, V> {
    map: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

/// A shared-cache counterpart to [`Memoized`] for use across threads.
///
/// Calls take `&self`, so one instance can back any number of worker
/// threads. The internal lock spans lookup, computation, and insertion.
pub struct SyncMemoized<K, V, F> {
    func: F,
    state: Mutex<CacheState<K, V>>,
}

impl<K, V, F> SyncMemoized<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: Fn(&K) -> V,
{
    pub fn new(func: F) -> Self {
        SyncMemoized {
            func,
            state: Mutex::new(CacheState {
                map: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Looks `arg` up in the shared cache, invoking the wrapped function on
    /// a miss.
    pub fn call(&self, arg: K) -> V {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(value) = state.map.get(&arg).cloned() {
            state.hits += 1;
            return value;
        }
        state.misses += 1;
        let value = (self.func)(&arg);
        state.map.insert(arg, value.clone());
        value
    }

    pub fn hits(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).hits
    }

    pub fn misses(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).misses
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.map.clear();
        state.hits = 0;
        state.misses = 0;
    }
}
