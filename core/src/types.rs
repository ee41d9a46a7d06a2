//! Todo list data model.
//!
//! This module defines the records the store manages. Items serialize to the
//! persisted layout `{ "id": string, "title": string, "completed": bool }` and
//! a list serializes as a plain JSON array, newest item first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque identifier, assigned once at creation.
    pub id: String,

    /// Display text. Never blank.
    pub title: String,

    /// Whether the task has been marked done.
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-completed item.
    #[must_use]
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }
}

/// Ordered collection of todo items, newest first.
///
/// The list itself only offers read access to callers outside the crate;
/// mutations go through [`TodoStore`](crate::store::TodoStore) so that every
/// change is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in display order (newest first).
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns `true` if an item with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Computes the completed-versus-total counts for this snapshot.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.items.iter().filter(|item| item.completed).count(),
            total: self.items.len(),
        }
    }

    pub(crate) fn prepend(&mut self, item: TodoItem) {
        self.items.insert(0, item);
    }

    /// Flips the completion flag of the matching item.
    ///
    /// Returns `false` when no item has this id.
    pub(crate) fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Drops the matching item, keeping the order of the rest.
    ///
    /// Returns `false` when no item has this id.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self { items }
    }
}

impl From<TodoList> for Vec<TodoItem> {
    fn from(list: TodoList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Completed versus total item counts, derived from a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of items marked completed.
    pub completed: usize,

    /// Number of items in the list.
    pub total: usize,
}

impl Progress {
    /// Number of items still open.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    /// Returns `true` when the list is non-empty and every item is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)
    }
}
