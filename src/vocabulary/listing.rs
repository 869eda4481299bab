//! Display-capped word listings.

use std::fmt;

use serde::Serialize;

/// The result of a prefix search or full listing.
///
/// Holds the complete result set; `display_limit` only bounds how many
/// entries the `Display` rendering prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordListing {
    #[serde(skip)]
    title: String,
    total: usize,
    entries: Vec<(String, String)>,
    #[serde(skip)]
    display_limit: usize,
}

impl WordListing {
    pub fn new<T: Into<String>>(
        title: T,
        entries: Vec<(String, String)>,
        display_limit: usize,
    ) -> Self {
        WordListing {
            title: title.into(),
            total: entries.len(),
            entries,
            display_limit,
        }
    }

    /// Size of the complete result set.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every matching `(word, definition)` pair.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The entries the rendering prints.
    pub fn shown(&self) -> &[(String, String)] {
        &self.entries[..self.entries.len().min(self.display_limit)]
    }

    /// Entries left out of the rendering.
    pub fn hidden(&self) -> usize {
        self.total - self.shown().len()
    }
}

impl fmt::Display for WordListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for (word, definition) in self.shown() {
            writeln!(f, "• {word}: {definition}")?;
        }
        if self.hidden() > 0 {
            write!(f, "\n... and {} more words", self.hidden())?;
        }
        Ok(())
    }
}
