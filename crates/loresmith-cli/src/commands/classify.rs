//! Classify command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use loresmith_extractor::classify_output;

/// Execute the classify command.
pub async fn execute_classify(args: InputArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(args)?;
    let kind = classify_output(&text);
    println!("{}", formatter.format_kind(kind)?);
    Ok(())
}
