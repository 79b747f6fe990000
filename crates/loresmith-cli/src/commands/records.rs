//! Show and list commands.

use crate::cli::ShowArgs;
use crate::commands::load_record;
use crate::error::Result;
use crate::output::Formatter;
use loresmith_store::StrategyChain;
use tracing::warn;

/// Execute the show command.
pub async fn execute_show(args: ShowArgs, repo: &StrategyChain, formatter: &Formatter) -> Result<()> {
    let record = load_record(repo, &args.id)?;
    println!("{}", formatter.format_record(&record)?);
    Ok(())
}

/// Execute the list command.
pub async fn execute_list(repo: &StrategyChain, formatter: &Formatter) -> Result<()> {
    let mut records = Vec::new();

    for id in repo.list()? {
        match repo.load(&id)?.value {
            Some(record) => records.push(record),
            None => warn!("Listed record {} could not be loaded", id),
        }
    }

    println!("{}", formatter.format_records(&records)?);
    Ok(())
}
