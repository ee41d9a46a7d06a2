//! Todo identifier generation.
//!
//! Identifiers only need to be unique within a session and stable once
//! assigned. The default [`TimeRandomIds`] generator combines a base-36
//! millisecond timestamp with a random alphanumeric suffix, e.g.
//! `lx2k9q1c-4f7h2m9dq0ze`.

use chrono::Utc;
use rand::Rng;

/// Length of the random alphanumeric suffix in generated ids.
const ID_SUFFIX_LEN: usize = 12;

/// Alphabet used for both the timestamp and the random suffix.
const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh todo identifiers.
///
/// Implementations must never return the same id twice within the lifetime
/// of one store.
pub trait IdGenerator {
    /// Produces a new identifier.
    fn next_id(&mut self) -> String;
}

/// Timestamp plus random suffix identifiers.
///
/// Cryptographic strength is not required; `rand`'s thread-local generator
/// gives roughly 62 bits of entropy per id on top of the timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeRandomIds;

impl IdGenerator for TimeRandomIds {
    fn next_id(&mut self) -> String {
        generate_todo_id()
    }
}

/// Deterministic `todo-1`, `todo-2`, ... identifiers.
///
/// Useful for tests and for embedding hosts that already own an id space.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator yielding `<prefix>-1`, `<prefix>-2`, ...
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("todo")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Generates a `<base36 millis>-<12 random chars>` identifier.
#[must_use]
pub fn generate_todo_id() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();

    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}-{suffix}", to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(CHARSET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
