//! Vocabulary entries stored at terminal trie nodes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single word in the vocabulary.
///
/// `word` is always normalized (trimmed, lowercased). `created_at` is fixed
/// when the word is first inserted and survives later definition updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub definition: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry.
    pub fn new<W, D>(word: W, definition: D, created_at: DateTime<Utc>) -> Self
    where
        W: Into<String>,
        D: Into<String>,
    {
        Entry {
            word: word.into(),
            definition: definition.into(),
            created_at,
        }
    }

    /// Split into the `(word, definition)` pair used by listings and exports.
    pub fn into_pair(self) -> (String, String) {
        (self.word, self.definition)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word: {}\nDefinition: {}", self.word, self.definition)
    }
}

/// Normalize a word or prefix for storage and lookup.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
