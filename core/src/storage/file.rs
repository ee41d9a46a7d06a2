//! File-backed storage adapter.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a `.tmp` sibling first
//! and are renamed over the target, so a crash mid-write leaves either the
//! old blob or the new one, never a truncated file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

use super::{validate_key, KeyValueStorage, StorageError};

/// File extension used for stored blobs.
const BLOB_EXTENSION: &str = "json";

/// Extension appended while a write is in flight.
const TEMP_EXTENSION: &str = "json.tmp";

/// Stores each key as a JSON file inside a directory.
///
/// The directory is created on the first write, so pointing a store at a
/// fresh location simply reads as "no saved data".
///
/// # Example
///
/// ```no_run
/// use taskpad_core::storage::{FileStorage, KeyValueStorage};
///
/// let storage = FileStorage::new("/home/user/.local/share/taskpad");
/// storage.write("todos", "[]").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `dir`. No I/O happens until first use.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the blobs.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path a key is stored at.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] for keys that fail
    /// [`validate_key`].
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{BLOB_EXTENSION}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        trace!(path = %path.display(), bytes = bytes.len(), "Read stored blob");

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| StorageError::NotUtf8(key.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp_path = self.dir.join(format!("{key}.{TEMP_EXTENSION}"));

        fs::create_dir_all(&self.dir)?;

        let mut file = File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &path)?;

        trace!(path = %path.display(), bytes = value.len(), "Wrote stored blob");
        Ok(())
    }
}
