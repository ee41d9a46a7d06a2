//! Thread-safe handle around a [`TodoStore`].
//!
//! Every operation takes a single mutex around its whole read-modify-write,
//! so each add, toggle or remove is atomic with respect to the others. No
//! ordering between callers is promised beyond that.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ValidationError;
use crate::id::{IdGenerator, TimeRandomIds};
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;
use crate::types::{Progress, TodoList};

/// Cloneable, lock-protected [`TodoStore`].
///
/// Methods return owned snapshots since the lock is released on return.
///
/// # Example
///
/// ```
/// use std::thread;
/// use taskpad_core::shared::SharedTodoStore;
/// use taskpad_core::storage::MemoryStorage;
///
/// let store = SharedTodoStore::new(MemoryStorage::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|n| {
///         let store = store.clone();
///         thread::spawn(move || store.add(&format!("Task {n}")).map(|_| ()))
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap().unwrap();
/// }
///
/// assert_eq!(store.snapshot().len(), 4);
/// ```
#[derive(Debug)]
pub struct SharedTodoStore<S, G = TimeRandomIds> {
    inner: Arc<Mutex<TodoStore<S, G>>>,
}

impl<S, G> Clone for SharedTodoStore<S, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStorage> SharedTodoStore<S> {
    /// Creates a shared store with the default key and id generator.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::from_store(TodoStore::new(storage))
    }
}

impl<S: KeyValueStorage, G: IdGenerator> SharedTodoStore<S, G> {
    /// Wraps an already constructed store.
    #[must_use]
    pub fn from_store(store: TodoStore<S, G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Owned copy of the current list.
    #[must_use]
    pub fn snapshot(&self) -> TodoList {
        self.lock().snapshot()
    }

    /// Completed versus total counts.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.lock().progress()
    }

    /// See [`TodoStore::add`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] for blank titles.
    pub fn add(&self, title: &str) -> Result<TodoList, ValidationError> {
        self.lock().add(title).cloned()
    }

    /// See [`TodoStore::toggle`].
    pub fn toggle(&self, id: &str) -> TodoList {
        self.lock().toggle(id).clone()
    }

    /// See [`TodoStore::remove`].
    pub fn remove(&self, id: &str) -> TodoList {
        self.lock().remove(id).clone()
    }

    /// See [`TodoStore::reload`].
    pub fn reload(&self) -> TodoList {
        self.lock().reload().clone()
    }

    fn lock(&self) -> MutexGuard<'_, TodoStore<S, G>> {
        // Mutations finish before they persist, so a panicking holder never
        // leaves a half-applied list behind.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
