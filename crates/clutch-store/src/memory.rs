use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::keys::validate_key;
use crate::traits::KvStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests, embedding and session-scoped state: data is lost
/// when the store is dropped. The store can be switched to read-only to
/// stand in for a storage medium that refuses writes.
pub struct InMemoryKvStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
    read_only: AtomicBool,
}

impl InMemoryKvStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            read_only: AtomicBool::new(false),
        }
    }

    /// Create a store pre-populated with one slot.
    pub fn with_slot(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.into());
        Self {
            slots: RwLock::new(slots),
            read_only: AtomicBool::new(false),
        }
    }

    /// Refuse (or accept again) every subsequent write.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Whether writes are currently refused.
    pub fn is_read_only(&self) -> bool {
        self.read_only.load(Ordering::SeqCst)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    /// Returns `true` if no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted list of occupied slot keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .slots
            .read()
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    fn ensure_writable(&self) -> StoreResult<()> {
        if self.is_read_only() {
            Err(StoreError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Poisoned(e.to_string())
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        validate_key(key)?;
        self.ensure_writable()?;
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        self.ensure_writable()?;
        let mut slots = self.slots.write().map_err(poisoned)?;
        Ok(slots.remove(key).is_some())
    }
}

impl std::fmt::Debug for InMemoryKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKvStore")
            .field("slot_count", &self.len())
            .field("read_only", &self.is_read_only())
            .finish()
    }
}
