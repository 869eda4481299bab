//! # Wordhoard
//!
//! A personal vocabulary notebook built on a character trie.
//!
//! ## Features
//!
//! - Exact and prefix lookup over normalized words
//! - Creation times that survive definition updates
//! - Deletion that prunes dead branches
//! - Pluggable persistence (lossy JSON, lossless binary)
//! - Plain-text import and text/JSON/CSV export

pub mod cli;
pub mod error;
pub mod storage;
pub mod trie;
pub mod vocabulary;

pub mod prelude {
    pub use crate::error::{Result, WordhoardError};
    pub use crate::storage::{BackendKind, StorageBackend, StorageFactory};
    pub use crate::trie::{Entry, Trie};
    pub use crate::vocabulary::{ExportFormat, ManagerConfig, VocabularyManager};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
