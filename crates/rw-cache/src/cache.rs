//! Result cache API.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rw_round::RoundedResult;
use tracing::{debug, trace};

/// Shared store of rounded results keyed by normalized name.
///
/// Create one per document-generation session and `clear` it when the
/// session ends. Entries are handed out as `Arc`s, so nothing retrieved
/// from the cache can be mutated. Writes are last-write-wins per name.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<BTreeMap<String, Arc<RoundedResult>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `result` under `name`, returning the entry it replaced.
    pub fn add(
        &self,
        name: impl Into<String>,
        result: impl Into<Arc<RoundedResult>>,
    ) -> Option<Arc<RoundedResult>> {
        let name = name.into();
        let previous = self.entries.write().insert(name.clone(), result.into());
        if previous.is_some() {
            debug!(%name, "overwrote cached result");
        } else {
            trace!(%name, "cached result");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<Arc<RoundedResult>> {
        let found = self.entries.read().get(name).cloned();
        if found.is_none() {
            trace!(name, "cache miss");
        }
        found
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cached names in ascending order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Every entry in name order.
    pub fn snapshot(&self) -> Vec<Arc<RoundedResult>> {
        self.entries.read().values().cloned().collect()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        debug!(count = entries.len(), "clearing result cache");
        entries.clear();
    }
}
