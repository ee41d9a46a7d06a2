//! Key-value storage used to persist todo lists and preferences.
//!
//! The store only needs two operations from its storage collaborator: read
//! the blob under a key, and replace it. Anything that can do that (a file
//! per key, an in-memory map, a browser's local storage behind FFI) can back
//! a [`TodoStore`](crate::store::TodoStore).
//!
//! # Adapters
//!
//! - [`MemoryStorage`]: a map behind a mutex, for tests and embedding
//! - [`FileStorage`]: one JSON file per key in a directory
//!
//! # Keys
//!
//! Keys must be non-empty, must not start with `.`, and may only contain
//! ASCII letters, digits, `-`, `_` and `.`. See [`validate_key`].

mod file;
mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors that can occur while reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters the adapter cannot store.
    #[error("invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// The underlying medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored blob is not valid UTF-8.
    #[error("stored value for '{0}' is not valid UTF-8")]
    NotUtf8(String),

    /// The adapter is unusable, e.g. a poisoned lock.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Read/replace access to string blobs stored under keys.
pub trait KeyValueStorage {
    /// Returns the blob stored under `key`, or `None` if nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium cannot be read. Callers in
    /// this crate treat any error the same as an absent value.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the blob cannot be stored.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Checks that `key` is usable by every adapter in this crate.
///
/// # Errors
///
/// Returns [`StorageError::InvalidKey`] if the key is empty, starts with a
/// dot, or contains characters other than ASCII alphanumerics, `-`, `_`
/// and `.`.
///
/// # Example
///
/// ```
/// use taskpad_core::storage::validate_key;
///
/// assert!(validate_key("todos").is_ok());
/// assert!(validate_key("../etc/passwd").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = |reason: &str| StorageError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key cannot be empty"));
    }
    if key.starts_with('.') {
        return Err(invalid("key cannot start with '.'"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(invalid(
            "key can only contain letters, numbers, '-', '_' and '.'",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        for key in ["todos", "darkMode", "list-2", "my_list", "v1.todos"] {
            assert!(validate_key(key).is_ok(), "{key} should be valid");
        }
    }

    #[test]
    fn rejects_bad_keys() {
        for key in ["", ".hidden", "a/b", "a\\b", "with space", "ünïcode"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey { .. })),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_key_display() {
        let err = validate_key("").unwrap_err();
        assert_eq!(err.to_string(), "invalid storage key '': key cannot be empty");
    }

    #[test]
    fn shared_adapters_see_the_same_data() {
        let storage = Arc::new(MemoryStorage::new());
        let other = Arc::clone(&storage);

        storage.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));

        let by_ref: &MemoryStorage = &storage;
        assert_eq!(KeyValueStorage::read(&by_ref, "k").unwrap().as_deref(), Some("v"));
    }
}
