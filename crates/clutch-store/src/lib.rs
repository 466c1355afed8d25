//! Key-value storage port for BikeClutch.
//!
//! The catalog never touches a storage medium directly. It reads and writes
//! named slots through the [`KvStore`] trait, which keeps the record store
//! testable against an in-memory fake.
//!
//! # Backends
//!
//! - [`InMemoryKvStore`] -- `HashMap`-based store for tests, embedding and
//!   session-scoped state
//! - [`FileKvStore`] -- one file per slot under a root directory
//!
//! # Design Rules
//!
//! 1. A slot holds opaque bytes; the store never interprets them.
//! 2. A `set` replaces the whole slot. Readers never observe a partial write.
//! 3. Keys are validated before they reach a backend.

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileKvStore;
pub use keys::validate_key;
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
