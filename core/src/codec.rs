//! Serialization of todo lists to and from their persisted form.
//!
//! # Persisted Format
//!
//! A list is stored as a JSON array of item objects, newest first:
//!
//! ```json
//! [
//!   {"id": "lx2k9q1c-4f7h2m9dq0ze", "title": "Buy milk", "completed": false},
//!   {"id": "lx2k8z0a-0a1b2c3d4e5f", "title": "Call mum", "completed": true}
//! ]
//! ```
//!
//! There is no version field and no partial recovery: a blob whose shape
//! does not match is rejected as a whole. Extra fields on an item are
//! ignored.
//!
//! # Example
//!
//! ```
//! use taskpad_core::codec::{decode_list, encode_list};
//!
//! let json = r#"[{"id": "a", "title": "Buy milk", "completed": false}]"#;
//! let list = decode_list(json).unwrap();
//! assert_eq!(list.len(), 1);
//!
//! let again = decode_list(&encode_list(&list).unwrap()).unwrap();
//! assert_eq!(list, again);
//! ```

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{TodoItem, TodoList};

/// Errors that can occur when decoding a persisted list.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The blob is not valid JSON, or could not be serialized.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level value is not a JSON array.
    #[error("todo list must be a JSON array")]
    NotAnArray,

    /// An entry is missing a field or has a field of the wrong type.
    #[error("invalid todo entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Two entries share an id.
    #[error("duplicate todo id: {0}")]
    DuplicateId(String),

    /// An entry has a blank title.
    #[error("todo entry at index {0} has a blank title")]
    EmptyTitle(usize),
}

/// Serializes a list into its persisted JSON form.
///
/// # Errors
///
/// Returns [`CodecError::InvalidJson`] if serialization fails, which cannot
/// happen for well-formed items but is surfaced rather than unwrapped.
pub fn encode_list(list: &TodoList) -> Result<String, CodecError> {
    Ok(serde_json::to_string(list)?)
}

/// Parses a persisted list, validating its shape and invariants.
///
/// # Errors
///
/// Returns a [`CodecError`] when:
/// - the content is not valid JSON
/// - the top-level value is not an array
/// - an entry lacks `id`, `title` or `completed`, or has the wrong type
/// - two entries share an id
/// - an entry's title is blank
pub fn decode_list(content: &str) -> Result<TodoList, CodecError> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let array = value.as_array().ok_or(CodecError::NotAnArray)?;

    let mut seen = HashSet::with_capacity(array.len());
    let mut items = Vec::with_capacity(array.len());

    for (index, entry) in array.iter().enumerate() {
        let item = TodoItem::deserialize(entry)
            .map_err(|source| CodecError::InvalidEntry { index, source })?;

        if item.title.trim().is_empty() {
            return Err(CodecError::EmptyTitle(index));
        }
        if !seen.insert(item.id.clone()) {
            return Err(CodecError::DuplicateId(item.id));
        }

        items.push(item);
    }

    Ok(TodoList::from(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_list_in_order() {
        let json = r#"[
            {"id": "b", "title": "Second", "completed": true},
            {"id": "a", "title": "First", "completed": false}
        ]"#;

        let list = decode_list(json).unwrap();
        let ids: Vec<&str> = list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(list.get("b").unwrap().completed);
        assert!(!list.get("a").unwrap().completed);
    }

    #[test]
    fn decodes_empty_array() {
        assert!(decode_list("[]").unwrap().is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"[{"id": "a", "title": "A", "completed": false, "color": "red"}]"#;
        assert_eq!(decode_list(json).unwrap().len(), 1);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = decode_list("{ not json").unwrap_err();
        assert!(matches!(err, CodecError::InvalidJson(_)));
    }

    #[test]
    fn rejects_non_array() {
        let err = decode_list(r#"{"id": "a", "title": "A", "completed": false}"#).unwrap_err();
        assert!(matches!(err, CodecError::NotAnArray));

        assert!(matches!(decode_list("null"), Err(CodecError::NotAnArray)));
        assert!(matches!(decode_list("42"), Err(CodecError::NotAnArray)));
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"[{"id": "a", "title": "A"}]"#;
        let err = decode_list(json).unwrap_err();
        assert!(matches!(err, CodecError::InvalidEntry { index: 0, .. }));
    }

    #[test]
    fn rejects_wrong_field_type() {
        let json = r#"[
            {"id": "a", "title": "A", "completed": false},
            {"id": 7, "title": "B", "completed": "yes"}
        ]"#;
        let err = decode_list(json).unwrap_err();
        assert!(matches!(err, CodecError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "title": "A", "completed": false},
            {"id": "a", "title": "B", "completed": true}
        ]"#;
        let err = decode_list(json).unwrap_err();
        assert!(matches!(err, CodecError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn rejects_blank_title() {
        let json = r#"[{"id": "a", "title": "   ", "completed": false}]"#;
        let err = decode_list(json).unwrap_err();
        assert!(matches!(err, CodecError::EmptyTitle(0)));
    }

    #[test]
    fn encode_produces_array_of_objects() {
        let list = TodoList::from(vec![TodoItem::new("a".to_string(), "A".to_string())]);
        let json = encode_list(&list).unwrap();
        assert_eq!(json, r#"[{"id":"a","title":"A","completed":false}]"#);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            CodecError::NotAnArray.to_string(),
            "todo list must be a JSON array"
        );
        assert_eq!(
            CodecError::DuplicateId("x".to_string()).to_string(),
            "duplicate todo id: x"
        );
        assert_eq!(
            CodecError::EmptyTitle(3).to_string(),
            "todo entry at index 3 has a blank title"
        );
    }
}
