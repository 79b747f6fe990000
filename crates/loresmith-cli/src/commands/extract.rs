//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::{load_record, read_input};
use crate::error::Result;
use crate::output::Formatter;
use loresmith_domain::CharacterRecord;
use loresmith_extractor::{classify_output, extract_with_report, Extraction, OutputKind};
use loresmith_store::StrategyChain;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    repo: &StrategyChain,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(args.input)?;

    let base = match &args.base {
        Some(id) => load_record(repo, id)?,
        None => CharacterRecord::new(),
    };

    let (kind, extraction) = extract(&text, &base);
    if kind == OutputKind::Plain {
        eprintln!(
            "{}",
            formatter.warning("No character sheet headers found; nothing extracted")
        );
    }

    println!(
        "{}",
        formatter.format_extraction(kind, &extraction.record, &extraction.changes)?
    );

    if args.save {
        let accepted = repo.save(&extraction.record)?;
        eprintln!(
            "{}",
            formatter.success(&format!(
                "Saved {} ({})",
                extraction.record.id,
                accepted.join(", ")
            ))
        );
    }

    Ok(())
}

/// Classify `text` and merge whatever it holds over `base`.
fn extract(text: &str, base: &CharacterRecord) -> (OutputKind, Extraction) {
    (classify_output(text), extract_with_report(text, base))
}
