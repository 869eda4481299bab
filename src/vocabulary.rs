//! The vocabulary manager facade.
//!
//! [`VocabularyManager`] owns one [`Trie`] and one [`StorageBackend`] and is
//! the only entry point front-ends need: word-level edits and queries, file
//! import/export, and whole-store save/load. Every operation reports success
//! or failure through [`Result`]; the `Display` of either side is the
//! user-facing message.
//!
//! # Example
//!
//! ```
//! use wordhoard::prelude::*;
//!
//! let mut manager = VocabularyManager::new();
//! manager.add_word("cat", "猫").unwrap();
//! manager.add_word("car", "汽车").unwrap();
//!
//! let listing = manager.prefix_search("ca").unwrap();
//! assert_eq!(listing.total(), 2);
//! assert!(manager.delete_word("dog").is_err());
//! ```
//!
//! The manager is single-owner: embed it behind one exclusive lock if it has
//! to be shared between threads.

pub mod config;
pub mod export;
pub mod import;
pub mod listing;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::error::{Result, WordhoardError};
use crate::storage::{BackendKind, StorageBackend, StorageFactory};
use crate::trie::{Entry, Trie, normalize_word};

pub use config::ManagerConfig;
pub use export::ExportFormat;
pub use import::{ImportReport, LineFailure};
pub use listing::WordListing;

/// Summary counters for a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyStats {
    pub total_words: usize,
    pub storage_backend: BackendKind,
}

impl fmt::Display for VocabularyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total words: {}\nStorage backend: {}",
            self.total_words, self.storage_backend
        )
    }
}

/// Facade over the vocabulary trie and its storage backend.
#[derive(Debug)]
pub struct VocabularyManager {
    trie: Trie,
    storage: Box<dyn StorageBackend>,
    config: ManagerConfig,
    last_path: Option<PathBuf>,
}

impl Default for VocabularyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyManager {
    /// Create an empty manager with the default (JSON) backend.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create an empty manager using the backend named in `config`.
    pub fn with_config(config: ManagerConfig) -> Self {
        VocabularyManager {
            trie: Trie::new(),
            storage: StorageFactory::create(config.backend),
            config,
            last_path: None,
        }
    }

    /// Create an empty manager bound to an explicit backend.
    pub fn with_backend(storage: Box<dyn StorageBackend>) -> Self {
        let config = ManagerConfig::default().with_backend(storage.kind());
        VocabularyManager {
            trie: Trie::new(),
            storage,
            config,
            last_path: None,
        }
    }

    /// Rebind the manager to another backend; the in-memory store is kept.
    pub fn set_backend(&mut self, storage: Box<dyn StorageBackend>) {
        self.config.backend = storage.kind();
        self.storage = storage;
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.storage.kind()
    }

    /// Read-only view of the underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Path of the last successful save or load.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    /// Add a word, or replace the definition of an existing one.
    pub fn add_word(&mut self, word: &str, definition: &str) -> Result<String> {
        if word.trim().is_empty() {
            return Err(WordhoardError::validation("word must not be empty"));
        }
        if self.trie.insert(word, definition) {
            Ok(format!("Added '{}'", normalize_word(word)))
        } else {
            Err(WordhoardError::validation(format!("could not add '{word}'")))
        }
    }

    /// Import a plain-text word list, one `word definition` per line.
    ///
    /// Fails only if the file cannot be read; bad lines are tallied in the
    /// returned report.
    pub fn import_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportReport> {
        let path = path.as_ref();
        let content = fs::read(path)?;
        let report = import::import_bytes(&mut self.trie, &content, self.config.import_error_preview);
        info!(
            "imported {} words from {} ({} failed)",
            report.inserted,
            path.display(),
            report.failed()
        );
        Ok(report)
    }

    /// Look up a word's full entry.
    pub fn lookup(&self, word: &str) -> Option<&Entry> {
        self.trie.search(word)
    }

    /// Look up a word and render it for display.
    pub fn search_word(&self, word: &str) -> Result<String> {
        match self.trie.search(word) {
            Some(entry) => Ok(entry.to_string()),
            None => Err(WordhoardError::not_found(format!("word '{}'", word.trim()))),
        }
    }

    /// List the words starting with `prefix`.
    pub fn prefix_search(&self, prefix: &str) -> Result<WordListing> {
        if prefix.trim().is_empty() {
            return Err(WordhoardError::validation("prefix must not be empty"));
        }
        let results = self.trie.prefix_search(prefix);
        if results.is_empty() {
            return Err(WordhoardError::not_found(format!(
                "no words starting with '{}'",
                prefix.trim()
            )));
        }
        let title = format!("Found {} words:", results.len());
        Ok(WordListing::new(title, results, self.config.prefix_display_limit))
    }

    /// List the whole vocabulary.
    pub fn list_all_words(&self) -> WordListing {
        let words = self.all_words();
        let title = if words.is_empty() {
            "The vocabulary is empty".to_string()
        } else {
            format!("{} words in vocabulary:", words.len())
        };
        WordListing::new(title, words, self.config.list_display_limit)
    }

    /// Remove a word.
    pub fn delete_word(&mut self, word: &str) -> Result<String> {
        if self.trie.delete(word) {
            Ok(format!("Deleted '{}'", normalize_word(word)))
        } else {
            Err(WordhoardError::not_found(format!("word '{}'", word.trim())))
        }
    }

    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            total_words: self.trie.count(),
            storage_backend: self.storage.kind(),
        }
    }

    /// Every `(word, definition)` pair in ascending order.
    pub fn all_words(&self) -> Vec<(String, String)> {
        self.trie
            .all_words()
            .into_iter()
            .map(Entry::into_pair)
            .collect()
    }

    /// Every entry, with creation times, in ascending order.
    pub fn all_words_with_timestamp(&self) -> Vec<Entry> {
        self.trie.all_words()
    }

    /// Persist the store through the bound backend.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<String> {
        let path = path.as_ref();
        self.storage.save(&self.trie, path)?;
        self.last_path = Some(path.to_path_buf());
        Ok(format!("Saved {} words to {}", self.trie.count(), path.display()))
    }

    /// Replace the store with the contents of `path`.
    ///
    /// The current store is swapped out only after the backend has fully
    /// loaded the file; on failure it is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<String> {
        let path = path.as_ref();
        let trie = self.storage.load(path).inspect_err(|e| {
            warn!("failed to load {}: {e}", path.display());
        })?;
        self.trie = trie;
        self.last_path = Some(path.to_path_buf());
        Ok(format!("Loaded {} words", self.trie.count()))
    }

    /// Export a snapshot of every entry as `text`, `json` or `csv`.
    ///
    /// An unknown format fails before anything is written.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P, format: &str) -> Result<String> {
        let format: ExportFormat = format.parse()?;
        self.export_as(path, format)
    }

    /// Export a snapshot of every entry in `format`.
    pub fn export_as<P: AsRef<Path>>(&self, path: P, format: ExportFormat) -> Result<String> {
        let path = path.as_ref();
        let entries = self.trie.all_words();
        export::export_entries(&entries, format, path)?;
        info!("exported {} words as {format} to {}", entries.len(), path.display());
        Ok(format!("Exported {} words to {}", entries.len(), path.display()))
    }
}
