//! Structured-text (JSON) storage backend.
//!
//! Snapshot layout:
//! ```json
//! {
//!   "words": [
//!     {"word": "apple", "definition": "苹果"}
//!   ]
//! }
//! ```
//!
//! Only words and definitions are written. Loading re-inserts every record,
//! so each reloaded word is stamped with the time of the load.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{BackendKind, StorageBackend, write_atomically};
use crate::trie::{Entry, Trie};

/// One `{word, definition}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub definition: String,
}

/// The `{"words": [...]}` document shared by the JSON backend and JSON export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSnapshot {
    #[serde(default)]
    pub words: Vec<WordRecord>,
}

impl WordSnapshot {
    /// Build a snapshot from entries, dropping timestamps.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        WordSnapshot {
            words: entries
                .into_iter()
                .map(|e| WordRecord {
                    word: e.word.clone(),
                    definition: e.definition.clone(),
                })
                .collect(),
        }
    }

    /// Serialize as pretty-printed JSON, keeping non-ASCII text readable.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild a trie; every record gets a fresh creation time.
    pub fn into_trie(self) -> Trie {
        let mut trie = Trie::new();
        for record in self.words {
            if !trie.insert(&record.word, record.definition) {
                warn!("skipping record with empty word");
            }
        }
        trie
    }
}

/// Lossy storage backend writing the `{"words": [...]}` JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonStorage;

impl JsonStorage {
    /// Create a new JSON backend.
    pub fn new() -> Self {
        JsonStorage
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, trie: &Trie, path: &Path) -> Result<()> {
        let entries = trie.all_words();
        let json = WordSnapshot::from_entries(&entries).to_json_pretty()?;
        write_atomically(path, |w| {
            w.write_all(json.as_bytes())?;
            Ok(())
        })?;
        info!("saved {} words as JSON to {}", entries.len(), path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Trie> {
        let content = fs::read_to_string(path)?;
        let snapshot: WordSnapshot = serde_json::from_str(&content)?;
        let trie = snapshot.into_trie();
        info!("loaded {} words from JSON {}", trie.count(), path.display());
        Ok(trie)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use crate::error::WordhoardError;

    #[test]
    fn test_save_writes_words_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");

        let mut trie = Trie::new();
        trie.insert("book", "书籍");
        trie.insert("apple", "苹果");

        JsonStorage::new().save(&trie, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("苹果"));
        assert!(!content.contains("created_at"));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["words"][0]["word"], "apple");
        assert_eq!(value["words"][1]["definition"], "书籍");
    }

    #[test]
    fn test_load_resets_timestamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        let old = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        let mut trie = Trie::new();
        trie.insert_at("apple", "苹果", Some(old));

        let storage = JsonStorage::new();
        storage.save(&trie, &path).unwrap();
        let loaded = storage.load(&path).unwrap();

        let entry = loaded.search("apple").unwrap();
        assert_eq!(entry.definition, "苹果");
        assert_ne!(entry.created_at, old);
    }

    #[test]
    fn test_load_tolerates_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(
            &path,
            r#"{"words": [{"word": "Cat"}, {"definition": "orphan"}, {"word": "dog", "definition": "狗"}]}"#,
        )
        .unwrap();

        let trie = JsonStorage::new().load(&path).unwrap();
        assert_eq!(trie.count(), 2);
        assert_eq!(trie.search("cat").unwrap().definition, "");
        assert_eq!(trie.search("dog").unwrap().definition, "狗");
    }

    #[test]
    fn test_load_failures_are_reported() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new();

        let missing = storage.load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(WordhoardError::Io(_))));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(storage.load(&path), Err(WordhoardError::Json(_))));
    }
}
