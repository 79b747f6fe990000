//! Integration tests for loresmith-store
//!
//! A file-backed strategy in front of an in-memory one, the layout the CLI uses.

use loresmith_domain::CharacterRecord;
use loresmith_store::{JsonFileStore, KvRecordStrategy, MemoryStore, RecordStrategy, StrategyChain};
use tempfile::TempDir;

fn file_chain(dir: &TempDir) -> StrategyChain {
    let file = JsonFileStore::open(dir.path().join("characters.json")).unwrap();
    StrategyChain::new()
        .with(KvRecordStrategy::new("file", file))
        .with(KvRecordStrategy::new("memory", MemoryStore::new()))
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let mut record = CharacterRecord::new();
    record.name = "Kaela".to_string();
    record.personality.mbti = "ISFP".to_string();
    record.stats.magic_defense = "9".to_string();

    {
        let chain = file_chain(&dir);
        assert_eq!(chain.save(&record).unwrap(), vec!["file", "memory"]);
    }

    let chain = file_chain(&dir);
    let loaded = chain.load(&record.id).unwrap();
    assert_eq!(loaded.strategy, "file");
    assert_eq!(loaded.value, Some(record.clone()));
    assert_eq!(chain.list().unwrap(), vec![record.id]);
}

#[test]
fn test_partial_json_record_loads_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    std::fs::write(
        &path,
        r#"{"character:old-1":"{\"id\":\"old-1\",\"name\":\"Legacy\",\"stats\":{\"hp\":\"10\"}}"}"#,
    )
    .unwrap();

    let strategy = KvRecordStrategy::new("file", JsonFileStore::open(&path).unwrap());
    let ids = strategy.list().unwrap();
    assert_eq!(ids.len(), 1);

    let record = strategy.load(&ids[0]).unwrap().unwrap();
    assert_eq!(record.name, "Legacy");
    assert_eq!(record.stats.hp, "10");
    assert_eq!(record.stats.mp, "");
    assert_eq!(record.bio, "");
}

#[test]
fn test_removed_records_stay_removed() {
    let dir = TempDir::new().unwrap();
    let record = CharacterRecord::new();

    {
        let chain = file_chain(&dir);
        chain.save(&record).unwrap();
        chain.remove(&record.id).unwrap();
    }

    let chain = file_chain(&dir);
    assert_eq!(chain.load(&record.id).unwrap().value, None);
    assert!(chain.list().unwrap().is_empty());
}
