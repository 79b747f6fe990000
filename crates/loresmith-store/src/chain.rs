//! Ordered record strategies with explicit fallback

use crate::strategy::RecordStrategy;
use crate::StoreError;
use loresmith_domain::{CharacterId, CharacterRecord};
use tracing::{debug, warn};

/// A value together with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The answer
    pub value: T,
    /// Name of the strategy that answered
    pub strategy: String,
}

/// Record strategies tried in order
///
/// Reads stop at the first strategy that answers without an error, and
/// that answer is final even when it is "not found". Writes go to every
/// strategy. Failures are logged and collected rather than hidden.
#[derive(Default)]
pub struct StrategyChain {
    strategies: Vec<Box<dyn RecordStrategy>>,
}

impl StrategyChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy; earlier strategies are preferred
    pub fn with<R: RecordStrategy + 'static>(mut self, strategy: R) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of the strategies, in order
    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Load a record from the first strategy that answers
    pub fn load(&self, id: &CharacterId) -> Result<Resolved<Option<CharacterRecord>>, StoreError> {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            match strategy.load(id) {
                Ok(value) => {
                    debug!(
                        "Strategy '{}' answered load of {} (found: {})",
                        strategy.name(),
                        id,
                        value.is_some()
                    );
                    return Ok(Resolved {
                        value,
                        strategy: strategy.name().to_string(),
                    });
                }
                Err(e) => {
                    warn!("Strategy '{}' failed to load {}: {}", strategy.name(), id, e);
                    failures.push(format!("{}: {}", strategy.name(), e));
                }
            }
        }

        Err(StoreError::Exhausted(failures))
    }

    /// Save a record to every strategy
    ///
    /// Returns the names of the strategies that accepted it.
    pub fn save(&self, record: &CharacterRecord) -> Result<Vec<String>, StoreError> {
        self.write_through("save", |strategy| strategy.save(record))
    }

    /// Remove a record from every strategy
    ///
    /// Returns the names of the strategies that accepted the removal.
    pub fn remove(&self, id: &CharacterId) -> Result<Vec<String>, StoreError> {
        self.write_through("remove", |strategy| strategy.remove(id))
    }

    /// Ids known to any strategy, sorted and without duplicates
    pub fn list(&self) -> Result<Vec<CharacterId>, StoreError> {
        let mut ids = Vec::new();
        let mut failures = Vec::new();
        let mut answered = false;

        for strategy in &self.strategies {
            match strategy.list() {
                Ok(found) => {
                    answered = true;
                    ids.extend(found);
                }
                Err(e) => {
                    warn!("Strategy '{}' failed to list records: {}", strategy.name(), e);
                    failures.push(format!("{}: {}", strategy.name(), e));
                }
            }
        }

        if !answered {
            return Err(StoreError::Exhausted(failures));
        }

        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    fn write_through<F>(&self, operation: &str, mut write: F) -> Result<Vec<String>, StoreError>
    where
        F: FnMut(&dyn RecordStrategy) -> Result<(), StoreError>,
    {
        let mut accepted = Vec::new();
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            match write(strategy.as_ref()) {
                Ok(()) => accepted.push(strategy.name().to_string()),
                Err(e) => {
                    warn!("Strategy '{}' failed to {}: {}", strategy.name(), operation, e);
                    failures.push(format!("{}: {}", strategy.name(), e));
                }
            }
        }

        if accepted.is_empty() {
            return Err(StoreError::Exhausted(failures));
        }

        debug!("{} accepted by {:?}", operation, accepted);
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KvRecordStrategy, MemoryStore};

    /// Strategy whose every operation fails
    struct Broken;

    impl RecordStrategy for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn load(&self, _id: &CharacterId) -> Result<Option<CharacterRecord>, StoreError> {
            Err(StoreError::Backend("unavailable".to_string()))
        }

        fn save(&self, _record: &CharacterRecord) -> Result<(), StoreError> {
            Err(StoreError::Backend("unavailable".to_string()))
        }

        fn remove(&self, _id: &CharacterId) -> Result<(), StoreError> {
            Err(StoreError::Backend("unavailable".to_string()))
        }

        fn list(&self) -> Result<Vec<CharacterId>, StoreError> {
            Err(StoreError::Backend("unavailable".to_string()))
        }
    }

    fn named(name: &str) -> CharacterRecord {
        let mut record = CharacterRecord::new();
        record.name = name.to_string();
        record
    }

    #[test]
    fn test_fallback_reports_answering_strategy() {
        let chain = StrategyChain::new()
            .with(Broken)
            .with(KvRecordStrategy::new("memory", MemoryStore::new()));
        let record = named("Rex");

        assert_eq!(chain.save(&record).unwrap(), vec!["memory"]);

        let loaded = chain.load(&record.id).unwrap();
        assert_eq!(loaded.strategy, "memory");
        assert_eq!(loaded.value, Some(record));
    }

    #[test]
    fn test_not_found_is_authoritative() {
        let primary = KvRecordStrategy::new("primary", MemoryStore::new());
        let secondary = KvRecordStrategy::new("secondary", MemoryStore::new());
        let record = named("Rex");
        secondary.save(&record).unwrap();

        let chain = StrategyChain::new().with(primary).with(secondary);
        let loaded = chain.load(&record.id).unwrap();
        assert_eq!(loaded.strategy, "primary");
        assert_eq!(loaded.value, None);
    }

    #[test]
    fn test_all_failing_is_exhausted() {
        let chain = StrategyChain::new().with(Broken).with(Broken);
        let id = CharacterId::new();

        match chain.load(&id) {
            Err(StoreError::Exhausted(failures)) => {
                assert_eq!(failures.len(), 2);
                assert!(failures[0].starts_with("broken:"));
            }
            other => panic!("Expected Exhausted, got {:?}", other),
        }
        assert!(matches!(chain.save(&named("x")), Err(StoreError::Exhausted(_))));
        assert!(matches!(chain.list(), Err(StoreError::Exhausted(_))));
    }

    #[test]
    fn test_empty_chain_is_exhausted() {
        let chain = StrategyChain::new();
        assert!(chain.names().is_empty());
        match chain.load(&CharacterId::new()) {
            Err(StoreError::Exhausted(failures)) => assert!(failures.is_empty()),
            other => panic!("Expected Exhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_writes_go_to_every_strategy() {
        let chain = StrategyChain::new()
            .with(KvRecordStrategy::new("a", MemoryStore::new()))
            .with(KvRecordStrategy::new("b", MemoryStore::new()));
        let record = named("Rex");

        assert_eq!(chain.save(&record).unwrap(), vec!["a", "b"]);
        assert_eq!(chain.list().unwrap(), vec![record.id.clone()]);

        assert_eq!(chain.remove(&record.id).unwrap(), vec!["a", "b"]);
        assert!(chain.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_merges_sorted_and_deduplicated() {
        let a = KvRecordStrategy::new("a", MemoryStore::new());
        let b = KvRecordStrategy::new("b", MemoryStore::new());
        let shared = named("Shared");
        let only_a = named("A");
        let only_b = named("B");
        a.save(&shared).unwrap();
        a.save(&only_a).unwrap();
        b.save(&shared).unwrap();
        b.save(&only_b).unwrap();

        let chain = StrategyChain::new().with(Broken).with(a).with(b);
        let ids = chain.list().unwrap();

        let mut expected = vec![shared.id, only_a.id, only_b.id];
        expected.sort();
        assert_eq!(ids, expected);
        assert_eq!(chain.names(), vec!["broken", "a", "b"]);
    }
}
