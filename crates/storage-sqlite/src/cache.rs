//! Process-lifetime read cache.
//!
//! Read-only queries are cached under a (operation, parameters) key and
//! served from memory until the next write. The write actor clears the whole
//! cache after every successful mutation: wholesale invalidation trades
//! throughput for staleness-freedom, and there is deliberately no per-key
//! invalidation.

use dashmap::DashMap;
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;

use leadfolio_core::errors::Result;

/// Cache key: the operation name plus its serialized parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    op: &'static str,
    params: String,
}

/// Keyed cache of read results. Values are type-erased so one map serves
/// every repository; each operation always stores the same concrete type
/// under its own `op` name.
#[derive(Default)]
pub struct ReadCache {
    entries: DashMap<CacheKey, Arc<dyn Any + Send + Sync>>,
}

impl ReadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for (op, params), loading and inserting it
    /// on a miss. Identical keys return the identical cached value until the
    /// cache is invalidated.
    pub fn get_or_load<T, P, F>(&self, op: &'static str, params: &P, load: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        P: Serialize + ?Sized,
        F: FnOnce() -> Result<T>,
    {
        let key = CacheKey {
            op,
            params: serde_json::to_string(params)?,
        };

        if let Some(entry) = self.entries.get(&key) {
            if let Ok(value) = Arc::clone(entry.value()).downcast::<T>() {
                return Ok(value);
            }
        }

        let value = Arc::new(load()?);
        self.entries
            .insert(key, Arc::clone(&value) as Arc<dyn Any + Send + Sync>);
        Ok(value)
    }

    /// Discards every cached result. Called after each successful write.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    /// Number of cached entries, for diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ReadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
