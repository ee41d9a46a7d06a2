//! Error types for Taskpad.
//!
//! Most failures inside the store are recovered locally: unreadable or
//! corrupt saved data loads as an empty list, failed writes are logged, and
//! lookups of unknown ids are no-ops. What remains visible to callers is
//! [`ValidationError`] from [`TodoStore::add`](crate::store::TodoStore::add),
//! plus the adapter and codec errors for code that uses those layers
//! directly.

use thiserror::Error;

use crate::codec::CodecError;
use crate::storage::StorageError;

/// Errors that can occur across Taskpad operations.
#[derive(Error, Debug)]
pub enum TaskpadError {
    /// Storage adapter error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Persisted data could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Input rejected before it reached the list.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Input rejected by a store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace only.
    #[error("todo title cannot be empty")]
    EmptyTitle,
}

/// A specialized `Result` type for Taskpad operations.
pub type Result<T> = std::result::Result<T, TaskpadError>;
