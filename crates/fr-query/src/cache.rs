//! Session-scoped memoization of query results.
//!
//! Results live until a successful write invalidates the whole cache;
//! there is no time-based expiry.

use fr_core::Frame;
use fr_db::SqlParam;
use std::collections::HashMap;
use std::sync::Mutex;

/// Frame cache keyed by statement text plus rendered parameter values.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Frame>>,
}

impl QueryCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a statement and its bound parameters.
    pub fn key(sql: &str, params: &[SqlParam]) -> String {
        let mut key = String::from(sql);
        for param in params {
            key.push('\n');
            key.push_str(&param.render());
        }
        key
    }

    /// Cached frame for the key, if any.
    pub fn get(&self, key: &str) -> Option<Frame> {
        let entries = self.entries.lock().unwrap();
        let hit = entries.get(key).cloned();
        if hit.is_some() {
            log::debug!("query cache hit");
        }
        hit
    }

    /// Store a frame under the key.
    pub fn insert(&self, key: String, frame: Frame) {
        self.entries.lock().unwrap().insert(key, frame);
    }

    /// Drop every cached result. Called after any successful write.
    pub fn invalidate_all(&self) {
        let mut entries = self.entries.lock().unwrap();
        log::debug!("invalidating {} cached queries", entries.len());
        entries.clear();
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
