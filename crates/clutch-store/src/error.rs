/// Errors from key-value store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slot key is not acceptable to the store.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend is read-only or otherwise unavailable.
    #[error("store is read-only")]
    ReadOnly,

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    Poisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
