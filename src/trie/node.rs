//! Trie node representation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::trie::entry::Entry;

/// A node in the vocabulary trie.
///
/// Children are keyed by character in an ordered map, so any alphabet is
/// supported and a depth-first walk visits words in ascending order.
/// A node is terminal exactly when it carries an [`Entry`].
///
/// `created_at` records when a word first ended here. Removing the entry
/// leaves it in place, so a word re-added at a surviving node keeps its
/// first creation time; pruned nodes take theirs with them.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) entry: Option<Entry>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

/// Outcome of removing a word below a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The word is not stored under this node.
    Missing,
    /// The word was removed; `prune` asks the parent to unlink this node.
    Removed { prune: bool },
}

impl TrieNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.entry.is_some()
    }

    /// The entry stored at this node, if terminal.
    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    /// When a word first ended at this node, even if it was since removed.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Child node for `ch`.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A node that is neither terminal nor on the path to a word.
    pub fn is_prunable(&self) -> bool {
        self.children.is_empty() && self.entry.is_none()
    }

    /// Follow `key` character by character from this node.
    pub(crate) fn descend(&self, key: &str) -> Option<&TrieNode> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Follow `key`, creating missing nodes along the way.
    pub(crate) fn descend_or_create(&mut self, key: &str) -> &mut TrieNode {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        node
    }

    /// Append clones of every entry in this subtree, in ascending word order.
    pub(crate) fn collect_entries(&self, out: &mut Vec<Entry>) {
        if let Some(entry) = &self.entry {
            out.push(entry.clone());
        }
        for child in self.children.values() {
            child.collect_entries(out);
        }
    }

    /// Remove the word spelled by `chars` below this node, post-order.
    ///
    /// Only the entry is cleared; the recorded creation time stays. A child that reports `prune` is unlinked here, after which this node
    /// reports its own prunability to its parent.
    pub(crate) fn remove(&mut self, chars: &[char]) -> Removal {
        let Some((first, rest)) = chars.split_first() else {
            return match self.entry.take() {
                Some(_) => Removal::Removed {
                    prune: self.children.is_empty(),
                },
                None => Removal::Missing,
            };
        };

        let Some(child) = self.children.get_mut(first) else {
            return Removal::Missing;
        };

        match child.remove(rest) {
            Removal::Missing => Removal::Missing,
            Removal::Removed { prune } => {
                if prune {
                    self.children.remove(first);
                }
                Removal::Removed {
                    prune: self.is_prunable(),
                }
            }
        }
    }

    /// Count the nodes in this subtree, including this one.
    pub(crate) fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }
}
