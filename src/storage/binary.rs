//! Full-fidelity binary storage backend.
//!
//! File layout (little-endian):
//!
//! | field    | size | content                          |
//! |----------|------|----------------------------------|
//! | magic    | 4    | `WHRD`                           |
//! | version  | 4    | format version, currently 1      |
//! | length   | 8    | payload length in bytes          |
//! | checksum | 4    | CRC32 of the payload             |
//! | payload  | n    | bincode-encoded `Vec<Entry>`     |
//!
//! The payload keeps words, definitions and creation times, so loading a
//! snapshot reproduces the saved trie entry for entry. The format is meant
//! for round-tripping within one deployment only.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::info;

use crate::error::{Result, WordhoardError};
use crate::storage::{BackendKind, StorageBackend, write_atomically};
use crate::trie::{Entry, Trie};

const MAGIC: &[u8; 4] = b"WHRD";
const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 20;

/// Lossless storage backend writing checksummed bincode snapshots.
#[derive(Debug, Clone, Default)]
pub struct BinaryStorage;

impl BinaryStorage {
    /// Create a new binary backend.
    pub fn new() -> Self {
        BinaryStorage
    }

    /// Encode entries into a complete snapshot image.
    pub fn encode(entries: &[Entry]) -> Result<Vec<u8>> {
        let payload = bincode::serialize(entries)?;
        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.write_all(MAGIC)?;
        out.write_u32::<LittleEndian>(FORMAT_VERSION)?;
        out.write_u64::<LittleEndian>(payload.len() as u64)?;
        out.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
        out.write_all(&payload)?;
        Ok(out)
    }

    /// Decode and verify a snapshot image.
    pub fn decode(bytes: &[u8]) -> Result<Vec<Entry>> {
        if bytes.len() < HEADER_LEN {
            return Err(WordhoardError::corrupt(format!(
                "snapshot is {} bytes, shorter than its header",
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(bytes);
        let mut magic = [0u8; 4];
        cursor.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(WordhoardError::corrupt("bad magic bytes"));
        }

        let version = cursor.read_u32::<LittleEndian>()?;
        if version != FORMAT_VERSION {
            return Err(WordhoardError::corrupt(format!(
                "unsupported snapshot version {version}"
            )));
        }

        let length = cursor.read_u64::<LittleEndian>()?;
        let checksum = cursor.read_u32::<LittleEndian>()?;
        let payload = &bytes[HEADER_LEN..];
        if payload.len() as u64 != length {
            return Err(WordhoardError::corrupt(format!(
                "payload is {} bytes, header says {length}",
                payload.len()
            )));
        }
        if crc32fast::hash(payload) != checksum {
            return Err(WordhoardError::corrupt("checksum mismatch"));
        }

        Ok(bincode::deserialize(payload)?)
    }
}

impl StorageBackend for BinaryStorage {
    fn save(&self, trie: &Trie, path: &Path) -> Result<()> {
        let entries = trie.all_words();
        let image = Self::encode(&entries)?;
        write_atomically(path, |w| {
            w.write_all(&image)?;
            Ok(())
        })?;
        info!(
            "saved {} words as binary snapshot to {}",
            entries.len(),
            path.display()
        );
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Trie> {
        let bytes = fs::read(path)?;
        let entries = Self::decode(&bytes)?;
        let expected = entries.len();
        let trie = Trie::from_entries(entries);
        if trie.count() != expected {
            return Err(WordhoardError::corrupt(format!(
                "snapshot lists {expected} entries but only {} are distinct words",
                trie.count()
            )));
        }
        info!("loaded {} words from binary snapshot {}", expected, path.display());
        Ok(trie)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn sample_trie() -> Trie {
        let mut trie = Trie::new();
        let ts = Utc.with_ymd_and_hms(2022, 2, 2, 12, 30, 0).unwrap();
        trie.insert_at("apple", "苹果", Some(ts));
        trie.insert("book", "书籍 \"hardcover\"");
        trie.insert("学习", "study");
        trie
    }

    #[test]
    fn test_round_trip_is_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.bin");
        let trie = sample_trie();

        let storage = BinaryStorage::new();
        storage.save(&trie, &path).unwrap();
        let loaded = storage.load(&path).unwrap();

        assert_eq!(loaded.all_words(), trie.all_words());
        assert_eq!(loaded.node_count(), trie.node_count());
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_empty_trie_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");

        let storage = BinaryStorage::new();
        storage.save(&Trie::new(), &path).unwrap();
        assert!(storage.load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_corruption() {
        let image = BinaryStorage::encode(&sample_trie().all_words()).unwrap();

        let mut flipped = image.clone();
        let last = flipped.len() - 1;
        flipped[last] ^= 0xff;
        assert!(matches!(
            BinaryStorage::decode(&flipped),
            Err(WordhoardError::Corrupt(_))
        ));

        let truncated = &image[..image.len() - 3];
        assert!(matches!(
            BinaryStorage::decode(truncated),
            Err(WordhoardError::Corrupt(_))
        ));

        let mut wrong_magic = image.clone();
        wrong_magic[0] = b'X';
        assert!(matches!(
            BinaryStorage::decode(&wrong_magic),
            Err(WordhoardError::Corrupt(_))
        ));

        assert!(matches!(
            BinaryStorage::decode(b"WHR"),
            Err(WordhoardError::Corrupt(_))
        ));
    }

    #[test]
    fn test_load_rejects_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{"words": []}"#).unwrap();

        let err = BinaryStorage::new().load(&path).unwrap_err();
        assert!(err.is_io_failure());
    }
}
