//! Response cache port
//!
//! Stores completed fan-out results keyed by the literal query text.

use fanout_domain::FanOutResult;

/// Key-value store for completed fan-out results.
///
/// Keys are compared by exact string equality. Implementations must be safe
/// to call from concurrent requests; a `put` for an existing key replaces the
/// previous value (last write wins).
pub trait ResponseCache: Send + Sync {
    /// Look up a previously stored result
    fn get(&self, query: &str) -> Option<FanOutResult>;

    /// Store a result under the given query
    fn put(&self, query: String, result: FanOutResult);

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
