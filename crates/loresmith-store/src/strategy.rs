//! Record persistence strategies

use crate::StoreError;
use loresmith_domain::traits::KeyValueStore;
use loresmith_domain::{CharacterId, CharacterRecord};
use std::sync::{Mutex, MutexGuard};

/// Key prefix for stored records
pub const RECORD_KEY_PREFIX: &str = "character:";

/// One way of persisting character records
///
/// Strategies take `&self` so a chain can hold several behind one shared
/// reference; implementations that mutate use interior locking.
pub trait RecordStrategy: Send + Sync {
    /// Name used in logs and in `Resolved`
    fn name(&self) -> &str;

    /// Load the record with `id`, `None` if this strategy has no such record
    fn load(&self, id: &CharacterId) -> Result<Option<CharacterRecord>, StoreError>;

    /// Save `record`, replacing any previous version
    fn save(&self, record: &CharacterRecord) -> Result<(), StoreError>;

    /// Remove the record with `id`; removing a missing record is not an error
    fn remove(&self, id: &CharacterId) -> Result<(), StoreError>;

    /// Ids of all stored records
    fn list(&self) -> Result<Vec<CharacterId>, StoreError>;
}

/// Records as JSON values in a key-value store
pub struct KvRecordStrategy<S> {
    name: String,
    store: Mutex<S>,
}

impl<S> KvRecordStrategy<S>
where
    S: KeyValueStore,
    S::Error: Into<StoreError>,
{
    /// Wrap `store` under the given strategy name
    pub fn new(name: impl Into<String>, store: S) -> Self {
        Self {
            name: name.into(),
            store: Mutex::new(store),
        }
    }

    fn key(id: &CharacterId) -> String {
        format!("{}{}", RECORD_KEY_PREFIX, id)
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, StoreError> {
        self.store
            .lock()
            .map_err(|_| StoreError::Backend(format!("{}: store lock poisoned", self.name)))
    }
}

impl<S> RecordStrategy for KvRecordStrategy<S>
where
    S: KeyValueStore + Send,
    S::Error: Into<StoreError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, id: &CharacterId) -> Result<Option<CharacterRecord>, StoreError> {
        let raw = self.lock()?.get(&Self::key(id)).map_err(Into::<StoreError>::into)?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, record: &CharacterRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        self.lock()?
            .set(&Self::key(&record.id), &json)
            .map_err(Into::<StoreError>::into)
    }

    fn remove(&self, id: &CharacterId) -> Result<(), StoreError> {
        self.lock()?.remove(&Self::key(id)).map_err(Into::<StoreError>::into)
    }

    fn list(&self) -> Result<Vec<CharacterId>, StoreError> {
        let keys = self.lock()?.keys().map_err(Into::<StoreError>::into)?;
        Ok(keys
            .iter()
            .filter_map(|key| key.strip_prefix(RECORD_KEY_PREFIX))
            .filter_map(|id| CharacterId::from_string(id).ok())
            .collect())
    }
}
