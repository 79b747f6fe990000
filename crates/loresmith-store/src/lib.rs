//! Loresmith Storage Layer
//!
//! Persists character records through the `KeyValueStore` port.
//!
//! # Architecture
//!
//! - `MemoryStore` / `JsonFileStore`: string key-value backends
//! - `KvRecordStrategy`: stores records as JSON under `character:<id>`
//! - `StrategyChain`: tries record strategies in order and says which one
//!   answered, instead of silently falling back
//!
//! # Examples
//!
//! ```
//! use loresmith_domain::CharacterRecord;
//! use loresmith_store::{KvRecordStrategy, MemoryStore, StrategyChain};
//!
//! let chain = StrategyChain::new()
//!     .with(KvRecordStrategy::new("memory", MemoryStore::new()));
//!
//! let mut record = CharacterRecord::new();
//! record.name = "Rex".to_string();
//! chain.save(&record).unwrap();
//!
//! let loaded = chain.load(&record.id).unwrap();
//! assert_eq!(loaded.strategy, "memory");
//! assert_eq!(loaded.value, Some(record));
//! ```

#![warn(missing_docs)]

mod chain;
mod kv;
mod strategy;

use thiserror::Error;

pub use chain::{Resolved, StrategyChain};
pub use kv::{JsonFileStore, MemoryStore};
pub use strategy::{KvRecordStrategy, RecordStrategy, RECORD_KEY_PREFIX};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the operation
    #[error("Backend error: {0}")]
    Backend(String),

    /// Every strategy in a chain failed
    #[error("All storage strategies failed: {}", .0.join("; "))]
    Exhausted(Vec<String>),
}
