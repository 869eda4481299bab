use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use wordhoard::storage::{BackendKind, StorageFactory};
use wordhoard::trie::Trie;
use wordhoard::vocabulary::{ManagerConfig, VocabularyManager};

fn dated_trie() -> Trie {
    let mut trie = Trie::new();
    let base = Utc.with_ymd_and_hms(2020, 1, 1, 9, 0, 0).unwrap();
    let words = [
        ("apple", "苹果"),
        ("book", "书籍"),
        ("car", "汽车"),
        ("cart", "购物车"),
        ("cat", "猫"),
        ("naïve", "天真的"),
    ];
    for (i, (word, definition)) in words.iter().enumerate() {
        let ts = base + chrono::Duration::days(i as i64);
        trie.insert_at(word, *definition, Some(ts));
    }
    trie
}

#[test]
fn test_json_round_trip_keeps_pairs_but_not_timestamps() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.json");
    let original = dated_trie();

    let backend = StorageFactory::create(BackendKind::Json);
    backend.save(&original, &path).unwrap();
    let reloaded = backend.load(&path).unwrap();

    let before: HashSet<(String, String)> = original.prefix_search("").into_iter().collect();
    let after: HashSet<(String, String)> = reloaded.prefix_search("").into_iter().collect();
    assert_eq!(before, after);

    for entry in original.all_words() {
        let restored = reloaded.search(&entry.word).unwrap();
        assert_ne!(
            restored.created_at, entry.created_at,
            "JSON snapshots do not carry creation times"
        );
    }
}

#[test]
fn test_binary_round_trip_is_exact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.bin");
    let original = dated_trie();

    let backend = StorageFactory::create(BackendKind::Binary);
    backend.save(&original, &path).unwrap();
    let reloaded = backend.load(&path).unwrap();

    assert_eq!(reloaded.all_words(), original.all_words());
    assert_eq!(reloaded.count(), original.count());
    assert!(reloaded.validate().is_ok());
}

#[test]
fn test_manager_binary_round_trip_preserves_creation_time() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.bin");

    let config = ManagerConfig::default().with_backend(BackendKind::Binary);
    let mut manager = VocabularyManager::with_config(config.clone());
    manager.add_word("apple", "苹果").unwrap();
    let created = manager.lookup("apple").unwrap().created_at;
    manager.save(&path).unwrap();

    let mut restored = VocabularyManager::with_config(config);
    restored.load(&path).unwrap();
    assert_eq!(restored.all_words_with_timestamp(), manager.all_words_with_timestamp());
    assert_eq!(restored.lookup("apple").unwrap().created_at, created);
}

#[test]
fn test_loading_with_wrong_backend_fails_cleanly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.json");

    let mut json_manager = VocabularyManager::new();
    json_manager.add_word("apple", "苹果").unwrap();
    json_manager.save(&path).unwrap();

    let mut binary_manager =
        VocabularyManager::with_config(ManagerConfig::default().with_backend(BackendKind::Binary));
    binary_manager.add_word("keep", "保留").unwrap();

    let err = binary_manager.load(&path).unwrap_err();
    assert!(err.is_io_failure());
    assert_eq!(binary_manager.all_words(), vec![("keep".to_string(), "保留".to_string())]);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("vocab.json");

    let mut manager = VocabularyManager::new();
    manager.add_word("apple", "苹果").unwrap();

    assert!(manager.save(&path).is_err());
    assert!(manager.last_path().is_none());
}
