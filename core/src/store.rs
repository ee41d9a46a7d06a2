//! The todo list store.
//!
//! [`TodoStore`] owns the authoritative [`TodoList`] and is the only thing
//! that mutates it. It loads the list from its storage adapter once at
//! construction and writes the full list back after every mutation.
//!
//! # Failure Handling
//!
//! - Saved data that is missing, unreadable or malformed loads as an empty
//!   list. The cause is logged at `warn` and never returned.
//! - A failed write is logged at `warn`; the in-memory list keeps the change.
//! - Toggling or removing an unknown id leaves the list unchanged.
//! - A blank title is rejected by [`TodoStore::add`] with
//!   [`ValidationError::EmptyTitle`] and nothing is written.
//!
//! # Example
//!
//! ```
//! use taskpad_core::storage::MemoryStorage;
//! use taskpad_core::store::TodoStore;
//!
//! let mut store = TodoStore::new(MemoryStorage::new());
//!
//! let id = store.add("Buy milk").unwrap().items()[0].id.clone();
//! assert!(!store.items().get(&id).unwrap().completed);
//!
//! store.toggle(&id);
//! assert!(store.items().get(&id).unwrap().completed);
//!
//! store.remove(&id);
//! assert!(store.items().is_empty());
//! ```

use tracing::{debug, warn};

use crate::codec::{decode_list, encode_list};
use crate::error::ValidationError;
use crate::id::{IdGenerator, TimeRandomIds};
use crate::storage::KeyValueStorage;
use crate::types::{Progress, TodoItem, TodoList};

/// Storage key the list is saved under unless configured otherwise.
pub const DEFAULT_LIST_KEY: &str = "todos";

/// Reads the list saved under `key`, falling back to an empty list.
///
/// Never fails: an absent entry, a storage error, or a blob that does not
/// decode all yield an empty list.
pub fn load_list<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> TodoList {
    let blob = match storage.read(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!(key, "No saved todo list, starting empty");
            return TodoList::new();
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read saved todo list, starting empty");
            return TodoList::new();
        }
    };

    match decode_list(&blob) {
        Ok(list) => {
            debug!(key, items = list.len(), "Loaded saved todo list");
            list
        }
        Err(e) => {
            warn!(key, error = %e, "Saved todo list is corrupt, starting empty");
            TodoList::new()
        }
    }
}

/// Owns the todo list and persists it after every change.
///
/// Generic over the storage adapter `S` and the id generator `G`.
#[derive(Debug)]
pub struct TodoStore<S, G = TimeRandomIds> {
    storage: S,
    ids: G,
    key: String,
    list: TodoList,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Creates a store using [`DEFAULT_LIST_KEY`] and loads the saved list.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_LIST_KEY)
    }

    /// Creates a store saving under `key` and loads the saved list.
    #[must_use]
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self::with_id_generator(storage, key, TimeRandomIds)
    }
}

impl<S: KeyValueStorage, G: IdGenerator> TodoStore<S, G> {
    /// Creates a store with a custom id generator and loads the saved list.
    #[must_use]
    pub fn with_id_generator(storage: S, key: impl Into<String>, ids: G) -> Self {
        let key = key.into();
        let list = load_list(&storage, &key);
        Self {
            storage,
            ids,
            key,
            list,
        }
    }

    /// Current snapshot of the list.
    #[must_use]
    pub fn items(&self) -> &TodoList {
        &self.list
    }

    /// Owned copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TodoList {
        self.list.clone()
    }

    /// Completed versus total counts for the current list.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.list.progress()
    }

    /// Storage key the list is saved under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage adapter backing this store.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Re-reads the saved list, replacing the in-memory one.
    ///
    /// Follows the same fallback rules as construction.
    pub fn reload(&mut self) -> &TodoList {
        self.list = load_list(&self.storage, &self.key);
        &self.list
    }

    /// Adds a new, not-yet-completed item at the front of the list.
    ///
    /// The title is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] if the title is empty or
    /// whitespace only. The list and storage are left untouched.
    pub fn add(&mut self, title: &str) -> Result<&TodoList, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let id = self.fresh_id();
        debug!(id = %id, "Adding todo");
        self.list.prepend(TodoItem::new(id, title.to_string()));

        self.persist();
        Ok(&self.list)
    }

    /// Flips the completed flag of the item with this id.
    ///
    /// Unknown ids leave the list unchanged.
    pub fn toggle(&mut self, id: &str) -> &TodoList {
        if self.list.toggle(id) {
            debug!(id, "Toggled todo");
        } else {
            debug!(id, "Toggle ignored, no such todo");
        }

        self.persist();
        &self.list
    }

    /// Removes the item with this id, keeping the order of the rest.
    ///
    /// Unknown ids leave the list unchanged.
    pub fn remove(&mut self, id: &str) -> &TodoList {
        if self.list.remove(id) {
            debug!(id, "Removed todo");
        } else {
            debug!(id, "Remove ignored, no such todo");
        }

        self.persist();
        &self.list
    }

    /// Consumes the store, returning the final list.
    #[must_use]
    pub fn into_list(self) -> TodoList {
        self.list
    }

    fn fresh_id(&mut self) -> String {
        // Saved lists may carry ids from another generator.
        loop {
            let id = self.ids.next_id();
            if !self.list.contains(&id) {
                return id;
            }
        }
    }

    fn persist(&self) {
        let blob = match encode_list(&self.list) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to encode todo list");
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.key, &blob) {
            warn!(key = %self.key, error = %e, "Failed to save todo list");
        }
    }
}
