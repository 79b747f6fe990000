//! Export command implementation.

use crate::cli::{ExportArgs, ExportKind};
use crate::commands::load_record;
use crate::error::Result;
use crate::output::Formatter;
use loresmith_domain::CharacterRecord;
use loresmith_extractor::render_sheet;
use loresmith_store::StrategyChain;
use std::fs;

/// Execute the export command.
pub async fn execute_export(
    args: ExportArgs,
    repo: &StrategyChain,
    formatter: &Formatter,
) -> Result<()> {
    let record = load_record(repo, &args.id)?;
    let content = render(&record, args.kind)?;

    match args.out {
        Some(path) => {
            fs::write(&path, &content)?;
            eprintln!(
                "{}",
                formatter.success(&format!("Exported {} to {}", record.display_name(), path))
            );
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn render(record: &CharacterRecord, kind: ExportKind) -> Result<String> {
    match kind {
        ExportKind::Json => Ok(serde_json::to_string_pretty(record)?),
        ExportKind::Sheet => Ok(render_sheet(record)),
    }
}
