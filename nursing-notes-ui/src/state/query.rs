//! Query Cache
//!
//! A small request cache shared through context. Results, including
//! failures, are cached per key for a staleness window; invalidating a key
//! forces the next reader to refetch. Only one fetch per key runs at a time,
//! and every reader of that key picks up its result.

use leptos::*;
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::rc::Rc;

/// Default staleness window
pub const DEFAULT_STALE_MS: f64 = 60_000.0;

enum Outcome {
    Value(Rc<dyn Any>),
    Error(String),
}

struct Entry {
    outcome: Outcome,
    fetched_at: f64,
}

/// Cache storage, independent of the reactive runtime
pub struct QueryCache {
    entries: HashMap<String, Entry>,
    in_flight: HashSet<String>,
    stale_after_ms: f64,
}

impl QueryCache {
    pub fn new(stale_after_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
            stale_after_ms,
        }
    }

    fn is_fresh(&self, entry: &Entry, now_ms: f64) -> bool {
        now_ms - entry.fetched_at < self.stale_after_ms
    }

    /// Fresh result for `key`; `None` when absent, stale or of another type
    pub fn get<T: 'static>(&self, key: &str, now_ms: f64) -> Option<Result<Rc<T>, String>> {
        let entry = self.entries.get(key).filter(|e| self.is_fresh(e, now_ms))?;
        match &entry.outcome {
            Outcome::Value(value) => Rc::clone(value).downcast::<T>().ok().map(Ok),
            Outcome::Error(message) => Some(Err(message.clone())),
        }
    }

    /// Last successful value regardless of age
    pub fn peek<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        match &self.entries.get(key)?.outcome {
            Outcome::Value(value) => Rc::clone(value).downcast::<T>().ok(),
            Outcome::Error(_) => None,
        }
    }

    pub fn insert<T: 'static>(&mut self, key: &str, value: T, now_ms: f64) {
        self.entries.insert(
            key.to_string(),
            Entry {
                outcome: Outcome::Value(Rc::new(value)),
                fetched_at: now_ms,
            },
        );
    }

    pub fn insert_error(&mut self, key: &str, message: String, now_ms: f64) {
        self.entries.insert(
            key.to_string(),
            Entry {
                outcome: Outcome::Error(message),
                fetched_at: now_ms,
            },
        );
    }

    /// Mark `key` stale; the value stays available through [`peek`](Self::peek)
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.fetched_at = f64::NEG_INFINITY;
        }
    }

    /// Claim the fetch for `key`; `false` if one is already running
    pub fn begin_fetch(&mut self, key: &str) -> bool {
        self.in_flight.insert(key.to_string())
    }

    pub fn finish_fetch(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    pub fn is_fetching(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }
}

/// Handle to the shared cache
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    /// Bumped whenever an entry changes so readers re-check the cache
    generation: RwSignal<u64>,
}

impl QueryClient {
    pub fn new(stale_after_ms: f64) -> Self {
        Self {
            cache: store_value(QueryCache::new(stale_after_ms)),
            generation: create_rw_signal(0),
        }
    }

    /// Force readers of `key` to refetch
    pub fn invalidate(&self, key: &str) {
        self.cache.update_value(|c| c.invalidate(key));
        self.notify();
    }

    fn notify(&self) {
        self.generation.update(|g| *g += 1);
    }
}

/// Provide the query client to the component tree
pub fn provide_query_client() {
    provide_context(QueryClient::new(DEFAULT_STALE_MS));
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not found")
}

/// Reactive view of one cached query
pub struct Query<T: 'static> {
    pub data: Signal<Option<Rc<T>>>,
    pub error: Signal<Option<String>>,
    pub loading: Signal<bool>,
}

// derived impls would demand `T: Copy`
impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Query<T> {}

/// Read `key` from the cache, fetching with `fetcher` when missing or stale
pub fn create_query<T, F, Fut>(key: impl Into<String>, fetcher: F) -> Query<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let client = use_query_client();
    let key: String = key.into();

    let data = create_rw_signal(None::<Rc<T>>);
    let error = create_rw_signal(None::<String>);
    let loading = create_rw_signal(true);

    create_effect(move |_| {
        let _ = client.generation.get();
        let now = js_sys::Date::now();

        match client.cache.with_value(|c| c.get::<T>(&key, now)) {
            Some(Ok(value)) => {
                data.set(Some(value));
                error.set(None);
                loading.set(false);
                return;
            }
            Some(Err(message)) => {
                error.set(Some(message));
                loading.set(false);
                return;
            }
            None => {}
        }

        // keep showing the stale value while refetching
        if let Some(stale) = client.cache.with_value(|c| c.peek::<T>(&key)) {
            data.set(Some(stale));
        }
        loading.set(true);

        let started = client
            .cache
            .try_update_value(|c| c.begin_fetch(&key))
            .unwrap_or(false);
        if !started {
            return;
        }

        let request = fetcher();
        let key = key.clone();
        spawn_local(async move {
            let result = request.await;
            let now = js_sys::Date::now();

            client.cache.update_value(|c| {
                c.finish_fetch(&key);
                match result {
                    Ok(value) => c.insert(&key, value, now),
                    Err(message) => {
                        web_sys::console::error_1(
                            &format!("Query {} failed: {}", key, message).into(),
                        );
                        c.insert_error(&key, message, now);
                    }
                }
            });
            client.notify();
        });
    });

    Query {
        data: data.into(),
        error: error.into(),
        loading: loading.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_value_is_returned() {
        let mut cache = QueryCache::new(DEFAULT_STALE_MS);
        cache.insert("notes", vec![1, 2, 3], 1_000.0);

        let value = cache.get::<Vec<i32>>("notes", 30_000.0).unwrap().unwrap();
        assert_eq!(*value, vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_value_is_not_returned_but_can_be_peeked() {
        let mut cache = QueryCache::new(DEFAULT_STALE_MS);
        cache.insert("notes", "v1".to_string(), 0.0);

        assert!(cache.get::<String>("notes", 60_000.0).is_none());
        assert_eq!(cache.peek::<String>("notes").as_deref().map(String::as_str), Some("v1"));
    }

    #[test]
    fn test_invalidate_marks_entry_stale() {
        let mut cache = QueryCache::new(DEFAULT_STALE_MS);
        cache.insert("templates", 5_u32, 1_000.0);
        cache.invalidate("templates");

        assert!(cache.get::<u32>("templates", 1_001.0).is_none());
        assert_eq!(cache.peek::<u32>("templates").map(|v| *v), Some(5));

        // unknown keys are a no-op
        cache.invalidate("missing");
    }

    #[test]
    fn test_errors_are_cached_until_stale() {
        let mut cache = QueryCache::new(DEFAULT_STALE_MS);
        cache.insert_error("notes", "Network error".to_string(), 0.0);

        assert_eq!(
            cache.get::<Vec<i32>>("notes", 10.0),
            Some(Err("Network error".to_string()))
        );
        assert!(cache.peek::<Vec<i32>>("notes").is_none());
        assert!(cache.get::<Vec<i32>>("notes", 60_000.0).is_none());
    }

    #[test]
    fn test_wrong_type_is_a_miss() {
        let mut cache = QueryCache::new(DEFAULT_STALE_MS);
        cache.insert("notes", 1_u8, 0.0);
        assert!(cache.get::<String>("notes", 1.0).is_none());
    }

    #[test]
    fn test_one_fetch_in_flight_per_key() {
        let mut cache = QueryCache::new(DEFAULT_STALE_MS);

        assert!(cache.begin_fetch("notes"));
        assert!(!cache.begin_fetch("notes"));
        assert!(cache.begin_fetch("templates"));
        assert!(cache.is_fetching("notes"));

        cache.finish_fetch("notes");
        assert!(!cache.is_fetching("notes"));
        assert!(cache.begin_fetch("notes"));
    }
}
