//! Prefix tree holding the vocabulary.
//!
//! The [`Trie`] maps normalized words to [`Entry`] payloads and supports
//! exact lookup, prefix listing, insertion with creation-time tracking and
//! deletion with pruning of dead branches.
//!
//! # Structural invariant
//!
//! Every node other than the root is either terminal or has at least one
//! child. Deletion restores this after every call; [`Trie::validate`] checks
//! it by walking the whole tree.
//!
//! # Example
//!
//! ```
//! use wordhoard::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat", "猫");
//! trie.insert("car", "汽车");
//! trie.insert("cart", "购物车");
//!
//! let words: Vec<String> = trie.prefix_search("ca").into_iter().map(|(w, _)| w).collect();
//! assert_eq!(words, vec!["car", "cart", "cat"]);
//!
//! assert!(trie.delete("cart"));
//! assert!(trie.validate().is_ok());
//! ```

pub mod entry;
pub mod node;

use chrono::{DateTime, Utc};
use log::debug;

use crate::error::{Result, WordhoardError};

pub use entry::{Entry, normalize_word};
pub use node::TrieNode;

use node::Removal;

/// A character trie of vocabulary entries.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from entries, keeping their creation times.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut trie = Trie::new();
        for entry in entries {
            trie.insert_at(&entry.word, entry.definition, Some(entry.created_at));
        }
        trie
    }

    /// Insert or update a word, stamping new words with the current time.
    ///
    /// Returns `false` without touching the trie when the word is empty
    /// after normalization.
    pub fn insert<D: Into<String>>(&mut self, word: &str, definition: D) -> bool {
        self.insert_at(word, definition, None)
    }

    /// Insert or update a word with an explicit creation time.
    ///
    /// `created_at` only applies when no time was recorded at the word's node
    /// yet. Re-inserting a word replaces its definition and keeps the first
    /// time, including after a delete that left the node in place.
    pub fn insert_at<D: Into<String>>(
        &mut self,
        word: &str,
        definition: D,
        created_at: Option<DateTime<Utc>>,
    ) -> bool {
        let word = normalize_word(word);
        if word.is_empty() {
            return false;
        }

        let node = self.root.descend_or_create(&word);
        match node.entry.as_mut() {
            Some(existing) => {
                existing.definition = definition.into();
                debug!("updated definition of '{word}'");
            }
            None => {
                let created_at = *node
                    .created_at
                    .get_or_insert_with(|| created_at.unwrap_or_else(Utc::now));
                debug!("inserted '{word}'");
                node.entry = Some(Entry::new(word, definition, created_at));
                self.len += 1;
            }
        }
        true
    }

    /// Look up a word exactly.
    pub fn search(&self, word: &str) -> Option<&Entry> {
        let word = normalize_word(word);
        self.root.descend(&word)?.entry()
    }

    /// Whether the word is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// All `(word, definition)` pairs starting with `prefix`, sorted by word.
    ///
    /// An empty prefix lists the whole vocabulary.
    pub fn prefix_search(&self, prefix: &str) -> Vec<(String, String)> {
        self.entries_with_prefix(prefix)
            .into_iter()
            .map(Entry::into_pair)
            .collect()
    }

    /// All entries starting with `prefix`, sorted by word.
    pub fn entries_with_prefix(&self, prefix: &str) -> Vec<Entry> {
        let prefix = normalize_word(prefix);
        let mut out = Vec::new();
        if let Some(node) = self.root.descend(&prefix) {
            // Ordered children make the walk emit words in ascending order.
            node.collect_entries(&mut out);
        }
        debug!("prefix '{prefix}' matched {} words", out.len());
        out
    }

    /// Every entry in the trie, sorted by word.
    pub fn all_words(&self) -> Vec<Entry> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_entries(&mut out);
        out
    }

    /// Remove a word, pruning nodes that no longer lead to any word.
    ///
    /// Returns `false` and leaves the trie unchanged if the word is absent.
    pub fn delete(&mut self, word: &str) -> bool {
        let chars: Vec<char> = normalize_word(word).chars().collect();
        if chars.is_empty() {
            return false;
        }
        match self.root.remove(&chars) {
            Removal::Missing => false,
            Removal::Removed { .. } => {
                self.len -= 1;
                debug!("deleted '{}'", chars.iter().collect::<String>());
                true
            }
        }
    }

    /// Number of stored words.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// The root node, for read-only traversal.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walk the whole tree and check its structural invariants.
    ///
    /// Fails if a non-root node is childless and non-terminal, if an entry's
    /// word differs from its path, or if the cached word count is stale.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        let mut terminals = 0;
        let mut path = String::new();
        check_node(&self.root, &mut path, true, &mut terminals, &mut problems);

        if terminals != self.len {
            problems.push(format!(
                "word count is {} but {} terminal nodes exist",
                self.len, terminals
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(WordhoardError::corrupt(problems.join("; ")))
        }
    }
}

fn check_node(
    node: &TrieNode,
    path: &mut String,
    is_root: bool,
    terminals: &mut usize,
    problems: &mut Vec<String>,
) {
    if let Some(entry) = node.entry() {
        *terminals += 1;
        if entry.word != *path {
            problems.push(format!("entry '{}' stored at path '{path}'", entry.word));
        }
    } else if !is_root && node.child_count() == 0 {
        problems.push(format!("dangling node at '{path}'"));
    }

    for (ch, child) in &node.children {
        path.push(*ch);
        check_node(child, path, false, terminals, problems);
        path.pop();
    }
}
