//! Character storage used by the commands.

use crate::config::Config;
use crate::error::Result;
use loresmith_store::{JsonFileStore, KvRecordStrategy, MemoryStore, StrategyChain};
use std::path::Path;
use tracing::warn;

/// Name of the file-backed strategy
pub const FILE_STRATEGY: &str = "file";

/// Name of the in-process fallback strategy
pub const MEMORY_STRATEGY: &str = "memory";

/// Open the character store configured in `config`.
pub fn open_repository(config: &Config) -> Result<StrategyChain> {
    Ok(open_at(&config.store_path()?))
}

/// File store at `path` backed by an in-process store.
///
/// An unreadable file leaves only the in-process store, so the session can
/// still run; writes then last until exit.
pub fn open_at(path: &Path) -> StrategyChain {
    let chain = match JsonFileStore::open(path) {
        Ok(store) => StrategyChain::new().with(KvRecordStrategy::new(FILE_STRATEGY, store)),
        Err(e) => {
            warn!("Character store {} unavailable: {}", path.display(), e);
            StrategyChain::new()
        }
    };
    chain.with(KvRecordStrategy::new(MEMORY_STRATEGY, MemoryStore::new()))
}
