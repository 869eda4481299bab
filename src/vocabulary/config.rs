//! Configuration for the vocabulary manager.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::BackendKind;

/// Settings for a [`VocabularyManager`](crate::vocabulary::VocabularyManager).
///
/// Missing fields in a config file fall back to the defaults:
///
/// ```json
/// {"backend": "binary", "prefix_display_limit": 20}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Backend used by `save` and `load`.
    pub backend: BackendKind,

    /// Entries printed by a prefix search listing.
    pub prefix_display_limit: usize,

    /// Entries printed by a full listing.
    pub list_display_limit: usize,

    /// Failed import lines spelled out in the import message.
    pub import_error_preview: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            backend: BackendKind::Json,
            prefix_display_limit: 50,
            list_display_limit: 100,
            import_error_preview: 3,
        }
    }
}

impl ManagerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_prefix_display_limit(mut self, limit: usize) -> Self {
        self.prefix_display_limit = limit;
        self
    }

    pub fn with_list_display_limit(mut self, limit: usize) -> Self {
        self.list_display_limit = limit;
        self
    }

    pub fn with_import_error_preview(mut self, preview: usize) -> Self {
        self.import_error_preview = preview;
        self
    }

    /// Read a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
