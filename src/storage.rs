//! Pluggable persistence for the vocabulary trie.
//!
//! A [`StorageBackend`] writes a whole [`Trie`] to one file and reads it back.
//! Callers hold a `Box<dyn StorageBackend>` and never depend on a concrete
//! format, so backends can be swapped without touching higher-level code.
//!
//! # Backends
//!
//! ## JsonStorage
//! - Human-readable `{"words": [{"word", "definition"}]}` document
//! - Lossy: creation timestamps are not stored, so reloaded words are
//!   stamped with the load time
//!
//! ## BinaryStorage
//! - Checksummed bincode snapshot of every entry
//! - Lossless: a save/load cycle reproduces the trie exactly
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use wordhoard::storage::{BackendKind, StorageFactory};
//! use wordhoard::trie::Trie;
//!
//! # fn main() -> wordhoard::error::Result<()> {
//! let backend = StorageFactory::create(BackendKind::Binary);
//!
//! let mut trie = Trie::new();
//! trie.insert("apple", "苹果");
//! backend.save(&trie, Path::new("vocabulary.bin"))?;
//!
//! let restored = backend.load(Path::new("vocabulary.bin"))?;
//! assert_eq!(restored.count(), 1);
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordhoardError};
use crate::trie::Trie;

pub mod binary;
pub mod json;

/// A serializer for one on-disk representation of the vocabulary.
///
/// Implementations must report every I/O or decode problem through the
/// returned `Result` and must not leave a half-built trie behind on failure.
pub trait StorageBackend: Send + Sync + fmt::Debug {
    /// Write every entry of `trie` to `path`, replacing any existing file.
    fn save(&self, trie: &Trie, path: &Path) -> Result<()>;

    /// Read a complete trie from `path`.
    fn load(&self, path: &Path) -> Result<Trie>;

    /// Which backend this is.
    fn kind(&self) -> BackendKind;
}

/// Supported storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Structured text, words and definitions only.
    #[default]
    Json,
    /// Full-fidelity binary snapshot.
    Binary,
}

impl BackendKind {
    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Json => "json",
            BackendKind::Binary => "binary",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = WordhoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(BackendKind::Json),
            "binary" | "bin" => Ok(BackendKind::Binary),
            other => Err(WordhoardError::format(format!("unknown storage backend '{other}'"))),
        }
    }
}

/// A factory for creating storage backends.
pub struct StorageFactory;

impl StorageFactory {
    /// Create the backend for `kind`.
    pub fn create(kind: BackendKind) -> Box<dyn StorageBackend> {
        match kind {
            BackendKind::Json => Box::new(json::JsonStorage::new()),
            BackendKind::Binary => Box::new(binary::BinaryStorage::new()),
        }
    }
}

/// Write a file by filling a sibling temporary file and renaming it over
/// `path`, so readers never observe a partially written snapshot.
pub(crate) fn write_atomically<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let tmp_path = temporary_path(path);
    let result = File::create(&tmp_path)
        .map_err(WordhoardError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            fill(&mut writer)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            Ok(())
        })
        .and_then(|_| fs::rename(&tmp_path, path).map_err(WordhoardError::from));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_requested_kind() {
        assert_eq!(StorageFactory::create(BackendKind::Json).kind(), BackendKind::Json);
        assert_eq!(StorageFactory::create(BackendKind::Binary).kind(), BackendKind::Binary);
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("JSON".parse::<BackendKind>().unwrap(), BackendKind::Json);
        assert_eq!("bin".parse::<BackendKind>().unwrap(), BackendKind::Binary);
        assert!("pickle".parse::<BackendKind>().is_err());
        assert_eq!(BackendKind::Binary.to_string(), "binary");
    }

    #[test]
    fn test_write_atomically_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");

        write_atomically(&path, |w| {
            w.write_all(b"{}")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temporary_path(&path).exists());
    }

    #[test]
    fn test_write_atomically_failure_keeps_old_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "old").unwrap();

        let result = write_atomically(&path, |_| Err(WordhoardError::serialization("boom")));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert!(!temporary_path(&path).exists());
    }
}
