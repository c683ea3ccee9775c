//! Keyed query cache.
//!
//! Holds the last fetched value per key together with its status, shares one
//! in-flight fetch between concurrent readers of the same key and lets
//! mutations invalidate entries once a write has landed.

use std::{
    fmt,
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use rustc_hash::FxHashMap;
use tracing::debug;

/// Identifies a cached collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Key of the cabins collection.
pub const CABINS_QUERY_KEY: QueryKey = QueryKey::new("cabins");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    /// Nothing has been requested yet, or the entry was invalidated.
    #[default]
    Idle,

    /// First fetch in flight, no data yet.
    Pending,

    Success,

    Error,
}

/// Point-in-time view of a cache entry.
#[derive(Debug)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<Arc<T>>,
}

impl<T> QueryState<T> {
    /// True while the first fetch for the key is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Pending
    }
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            data: self.data.clone(),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
        }
    }
}

struct Entry<T> {
    state: QueryState<T>,
    fetched_at: Option<Instant>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            state: QueryState::default(),
            fetched_at: None,
        }
    }
}

pub struct QueryCache<T> {
    stale_time: Duration,
    entries: Mutex<FxHashMap<QueryKey, Entry<T>>>,
    flights: Mutex<FxHashMap<QueryKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl<T> fmt::Debug for QueryCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("stale_time", &self.stale_time)
            .finish_non_exhaustive()
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl<T> QueryCache<T> {
    /// Data younger than `stale_time` is served without refetching.
    ///
    /// With a zero stale time every read refetches unless a fetch completed
    /// after the read was requested.
    #[must_use]
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: Mutex::new(FxHashMap::default()),
            flights: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Current state of `key`.
    #[must_use]
    pub fn snapshot(&self, key: QueryKey) -> QueryState<T> {
        self.entries()
            .get(&key)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    /// Return fresh data for `key`, running `fetcher` when there is none.
    ///
    /// Readers of the same key queue behind a single in-flight fetch and reuse
    /// its result.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error when the fetch fails. Previously fetched
    /// data is left in place.
    pub async fn fetch<F, Fut, E>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let requested_at = Instant::now();

        if let Some(data) = self.fresh_data(key, requested_at) {
            return Ok(data);
        }

        let flight = self.flight(key);
        let _guard = flight.lock().await;

        if let Some(data) = self.fresh_data(key, requested_at) {
            debug!(%key, "reusing concurrent fetch");

            return Ok(data);
        }

        self.begin_fetch(key);

        let result = fetcher().await;

        let mut entries = self.entries();
        let entry = entries.entry(key).or_default();

        match result {
            Ok(value) => {
                let data = Arc::new(value);

                entry.state.status = QueryStatus::Success;
                entry.state.data = Some(Arc::clone(&data));
                entry.fetched_at = Some(Instant::now());

                Ok(data)
            }
            Err(error) => {
                entry.state.status = QueryStatus::Error;

                Err(error)
            }
        }
    }

    /// Drop the cached data for `key` so the next read refetches.
    ///
    /// Waits for an in-flight fetch of the key to settle first, so data read
    /// before a write cannot land after the invalidation.
    pub async fn invalidate(&self, key: QueryKey) {
        let flight = self.flight(key);
        let _guard = flight.lock().await;

        if self.entries().remove(&key).is_some() {
            debug!(%key, "invalidated query");
        }
    }

    fn fresh_data(&self, key: QueryKey, requested_at: Instant) -> Option<Arc<T>> {
        let entries = self.entries();
        let entry = entries.get(&key)?;
        let fetched_at = entry.fetched_at?;

        let fresh = fetched_at >= requested_at
            || requested_at.saturating_duration_since(fetched_at) < self.stale_time;

        if fresh { entry.state.data.clone() } else { None }
    }

    fn begin_fetch(&self, key: QueryKey) {
        let mut entries = self.entries();
        let entry = entries.entry(key).or_default();

        if entry.state.data.is_none() {
            entry.state.status = QueryStatus::Pending;
        }
    }

    fn flight(&self, key: QueryKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut flights = self.flights.lock().unwrap_or_else(PoisonError::into_inner);

        Arc::clone(flights.entry(key).or_default())
    }

    fn entries(&self) -> MutexGuard<'_, FxHashMap<QueryKey, Entry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
