//! Command implementations.

pub mod classify;
pub mod export;
pub mod extract;
pub mod paginate;
pub mod profile;
pub mod records;

pub use self::classify::execute_classify;
pub use self::export::execute_export;
pub use self::extract::execute_extract;
pub use self::paginate::execute_paginate;
pub use self::profile::execute_profile;
pub use self::records::{execute_list, execute_show};

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use loresmith_domain::{CharacterId, CharacterRecord};
use loresmith_store::StrategyChain;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Read command input from the argument, a file, or stdin.
pub(crate) fn read_input(args: InputArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = args.file {
        Ok(fs::read_to_string(file_path)?)
    } else if let Some(text) = args.text {
        Ok(text)
    } else {
        Err(CliError::InvalidInput(
            "Provide text, --file or --stdin".to_string(),
        ))
    }
}

/// Load a stored record, failing if no strategy has it.
pub(crate) fn load_record(repo: &StrategyChain, id: &str) -> Result<CharacterRecord> {
    let id = CharacterId::from_string(id).map_err(CliError::InvalidInput)?;
    let resolved = repo.load(&id)?;
    debug!("Record {} answered by '{}'", id, resolved.strategy);
    resolved
        .value
        .ok_or_else(|| CliError::NotFound(id.to_string()))
}
