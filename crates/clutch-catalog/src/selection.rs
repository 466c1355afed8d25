use clutch_store::KvStore;
use clutch_types::BikeId;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DEFAULT_SELECTION_KEY;

/// Most records a comparison selection can hold.
pub const SELECTION_CAPACITY: usize = 2;

/// Result of adding a record to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// The id was appended.
    Added,
    /// The id was already selected; nothing changed.
    AlreadySelected,
    /// The selection already holds two ids; nothing changed.
    Full,
}

/// Ordered pick of up to two record ids awaiting comparison.
///
/// Lives in a session-scoped store (typically an [`clutch_store::InMemoryKvStore`])
/// as a JSON array. Unreadable or corrupt state counts as an empty
/// selection; failed writes are logged and dropped.
pub struct ComparisonSelection<S> {
    store: S,
    key: String,
}

impl<S: KvStore> ComparisonSelection<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SELECTION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Currently selected ids, in the order they were added.
    pub fn ids(&self) -> Vec<BikeId> {
        match self.store.get(&self.key) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(error = %e, "comparison selection is corrupt; treating as empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "comparison selection unreadable; treating as empty");
                Vec::new()
            }
        }
    }

    /// Add `id` unless it is already selected or the selection is full.
    pub fn add(&self, id: BikeId) -> SelectionOutcome {
        let mut ids = self.ids();
        if ids.contains(&id) {
            return SelectionOutcome::AlreadySelected;
        }
        if ids.len() >= SELECTION_CAPACITY {
            return SelectionOutcome::Full;
        }
        debug!(%id, "selected for comparison");
        ids.push(id);
        self.save(&ids);
        SelectionOutcome::Added
    }

    /// The two comparison slots, filled in selection order.
    pub fn slots(&self) -> (Option<BikeId>, Option<BikeId>) {
        let mut ids = self.ids().into_iter();
        (ids.next(), ids.next())
    }

    /// Forget the selection.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            warn!(error = %e, "failed to clear comparison selection");
        }
    }

    fn save(&self, ids: &[BikeId]) {
        let result = serde_json::to_vec(ids)
            .map_err(|e| e.to_string())
            .and_then(|bytes| self.store.set(&self.key, &bytes).map_err(|e| e.to_string()));
        if let Err(error) = result {
            warn!(%error, "comparison selection write failed; write discarded");
        }
    }
}
