//! Resolved interface group cache
//!
//! Maps a logical key (a group name, or [`DEFAULT_KEY`]) to the group it
//! resolved to. Entries are never evicted or refreshed: a resolved key is
//! trusted for the lifetime of the cache.
//!
//! # Concurrency
//!
//! Safe to share between tasks. Each key owns a [`OnceCell`], so concurrent
//! resolutions of the same uncached key run the fetch once and every caller
//! gets its result (single-flight). A failed fetch leaves the key empty and
//! the next caller fetches again; the last caller to give up on an empty key
//! drops it from the map. Every caller can abandon its wait with its own
//! cancellation token. The key map lock is never held across an await.

use crate::error::{IfGroupError, IfGroupResult};
use crate::group::InterfaceGroup;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Cache key used when no group name was requested
pub const DEFAULT_KEY: &str = "default";

type Slot = Arc<OnceCell<InterfaceGroup>>;

/// Cache of resolved interface groups
#[derive(Debug, Default)]
pub struct GroupCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl GroupCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for an optional group name
    pub fn key_for(name: Option<&str>) -> &str {
        name.unwrap_or(DEFAULT_KEY)
    }

    /// Get the cached group for `key`, if resolved
    pub fn lookup(&self, key: &str) -> Option<InterfaceGroup> {
        self.slots()
            .get(key)
            .and_then(|slot| slot.get().cloned())
    }

    /// Whether `key` holds a resolved group
    pub fn contains(&self, key: &str) -> bool {
        self.slots()
            .get(key)
            .is_some_and(|slot| slot.initialized())
    }

    /// Insert or overwrite the group for `key`
    pub fn store(&self, key: &str, group: InterfaceGroup) {
        debug!("Caching interface group {} under {}", group.name, key);
        self.slots()
            .insert(key.to_string(), Arc::new(OnceCell::new_with(Some(group))));
    }

    /// Return the group for `key`, running `fetch` to resolve it if absent
    ///
    /// Concurrent callers for the same key share one `fetch`. On error
    /// nothing is stored and the error goes to the caller whose fetch failed;
    /// waiting callers then run their own fetch. A caller whose `cancel`
    /// fires stops waiting and gets `Cancelled`, whoever runs the fetch.
    pub async fn get_or_try_resolve<F, Fut>(
        &self,
        key: &str,
        cancel: &CancellationToken,
        fetch: F,
    ) -> IfGroupResult<InterfaceGroup>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = IfGroupResult<InterfaceGroup>>,
    {
        let slot = self.slot(key);
        if let Some(group) = slot.get() {
            debug!("Cache hit for interface group key {}", key);
            return Ok(group.clone());
        }

        debug!("Cache miss for interface group key {}", key);
        let resolved = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(IfGroupError::Cancelled),
            resolved = slot.get_or_try_init(fetch) => resolved.cloned(),
        };

        if resolved.is_err() {
            self.release(key, slot);
        }
        resolved
    }

    /// Number of resolved keys
    pub fn len(&self) -> usize {
        self.slots()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolved keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .slots()
            .iter()
            .filter(|(_, slot)| slot.initialized())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn slot(&self, key: &str) -> Slot {
        self.slots().entry(key.to_string()).or_default().clone()
    }

    /// Drop `key` if it still maps to this empty `slot` and no other caller
    /// holds it
    fn release(&self, key: &str, slot: Slot) {
        let mut slots = self.slots();
        let unused = slots.get(key).is_some_and(|current| {
            Arc::ptr_eq(current, &slot)
                && !current.initialized()
                && Arc::strong_count(current) == 2
        });
        if unused {
            debug!("Releasing unresolved interface group key {}", key);
            slots.remove(key);
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        // The map is only ever mutated by single insertions and removals, so
        // a poisoned lock still guards a consistent map.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}
