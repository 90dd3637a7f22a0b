//! In-memory response cache.
//!
//! Entries live as long as the cache instance. There is no eviction and no
//! invalidation.

use fanout_application::ports::response_cache::ResponseCache;
use fanout_domain::FanOutResult;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

/// Unbounded map from exact query text to its fan-out result.
///
/// The lock is held only for the duration of a single `get` or `put`, never
/// across upstream calls.
#[derive(Default)]
pub struct InMemoryResponseCache {
    entries: RwLock<HashMap<String, FanOutResult>>,
}

impl InMemoryResponseCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseCache for InMemoryResponseCache {
    fn get(&self, query: &str) -> Option<FanOutResult> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(query)
            .cloned()
    }

    fn put(&self, query: String, result: FanOutResult) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.insert(query, result).is_some() {
            trace!("Replaced existing cache entry");
        }
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
