use std::sync::Arc;

use crate::error::StoreResult;

/// Named-slot key-value store.
///
/// All implementations must satisfy these invariants:
/// - `set` replaces the slot atomically from the caller's perspective.
/// - `get` of a slot that was never written returns `Ok(None)`.
/// - Keys are validated with [`crate::validate_key`] before use.
pub trait KvStore: Send + Sync {
    /// Read the bytes held in `key`.
    ///
    /// Returns `Ok(None)` if the slot is empty.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace the bytes held in `key`.
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Clear `key`. Returns `true` if the slot held a value.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Check whether `key` holds a value.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        (**self).contains(key)
    }
}
