//! Slot key validation.
//!
//! Valid keys:
//! - Must be non-empty and at most 128 bytes
//! - Must not contain whitespace, control characters, `/` or `\`
//! - Must not contain `..` or start with `.`
//!
//! The rules keep every key usable as a single file name for
//! [`crate::FileKvStore`].

use crate::error::{StoreError, StoreResult};

/// Longest accepted key, in bytes.
pub const MAX_KEY_LEN: usize = 128;

/// Validate a slot key, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use clutch_store::validate_key;
///
/// assert!(validate_key("bikeClutch_bikes").is_ok());
/// assert!(validate_key("").is_err());
/// assert!(validate_key("../etc").is_err());
/// ```
pub fn validate_key(key: &str) -> StoreResult<()> {
    let reject = |reason: &str| {
        Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        })
    };

    if key.is_empty() {
        return reject("key must not be empty");
    }
    if key.len() > MAX_KEY_LEN {
        return reject("key is too long");
    }
    if let Some(ch) = key
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || *c == '/' || *c == '\\')
    {
        return reject(&format!("contains forbidden character: {ch:?}"));
    }
    if key.contains("..") {
        return reject("must not contain '..'");
    }
    if key.starts_with('.') {
        return reject("must not start with '.'");
    }
    Ok(())
}
