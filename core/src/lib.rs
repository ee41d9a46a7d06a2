//! Taskpad core - todo list store and persistence contract.
//!
//! This crate holds the logic behind Taskpad: an ordered list of todo items
//! that can be added (newest first), toggled and removed, and that is saved
//! to a key-value storage adapter after every change.
//!
//! # Overview
//!
//! A [`TodoStore`] is built around any [`KeyValueStorage`] adapter. It loads
//! the saved list once at construction, falling back to an empty list when
//! nothing usable is stored, and writes the full list back after each
//! mutation. Hosts render from the snapshot the store hands back.
//!
//! # Modules
//!
//! - [`types`]: `TodoItem`, `TodoList` and the derived `Progress`
//! - [`store`]: the single-owner store
//! - [`shared`]: a lock-protected store for multi-threaded hosts
//! - [`storage`]: the storage trait plus memory and file adapters
//! - [`codec`]: persisted JSON format
//! - [`id`]: identifier generation
//! - [`appearance`]: the independent light/dark preference
//! - [`error`]: error types

pub mod appearance;
pub mod codec;
pub mod error;
pub mod id;
pub mod shared;
pub mod storage;
pub mod store;
pub mod types;

pub use appearance::{AppearancePreference, Theme, DEFAULT_APPEARANCE_KEY};
pub use codec::{decode_list, encode_list, CodecError};
pub use error::{Result, TaskpadError, ValidationError};
pub use id::{IdGenerator, SequentialIds, TimeRandomIds};
pub use shared::SharedTodoStore;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{load_list, TodoStore, DEFAULT_LIST_KEY};
pub use types::{Progress, TodoItem, TodoList};
