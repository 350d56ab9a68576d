// Icon URL cache
// Maps alias-resolved mimetypes to icon URLs for the lifetime of a session

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shared cache of resolved icon URLs.
///
/// Entries are only ever added; there is no eviction. Cloning yields a
/// handle to the same cache, so several resolvers can share one session
/// cache.
#[derive(Clone)]
pub struct IconCache {
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the cached URL for an alias-resolved mimetype
    pub fn get(&self, mime_type: &str) -> Option<String> {
        match self.cache.read() {
            Ok(cache) => cache.get(mime_type).cloned(),
            Err(e) => {
                tracing::warn!(target: "npicons::cache", "Failed to acquire read lock on icon cache: {}", e);
                // Try to recover from poisoned lock
                let cache = e.into_inner();
                cache.get(mime_type).cloned()
            }
        }
    }

    /// Store a URL in the cache.
    ///
    /// Concurrent resolutions of the same mimetype compute the same URL, so
    /// the last write simply wins.
    pub fn insert(&self, mime_type: String, url: String) {
        match self.cache.write() {
            Ok(mut cache) => {
                cache.insert(mime_type, url);
            }
            Err(e) => {
                tracing::warn!(target: "npicons::cache", "Failed to acquire write lock on icon cache: {}", e);
                // Try to recover from poisoned lock
                let mut cache = e.into_inner();
                cache.insert(mime_type, url);
            }
        }
    }

    pub fn contains(&self, mime_type: &str) -> bool {
        match self.cache.read() {
            Ok(cache) => cache.contains_key(mime_type),
            Err(e) => e.into_inner().contains_key(mime_type),
        }
    }

    pub fn len(&self) -> usize {
        match self.cache.read() {
            Ok(cache) => cache.len(),
            Err(e) => e.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}
