//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use loresmith_domain::{CharacterRecord, FieldChange, FieldPath, PageSlice};
use loresmith_extractor::OutputKind;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a classification result.
    pub fn format_kind(&self, kind: OutputKind) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "kind": kind.as_str() }),
            )?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(kind.as_str().to_string()),
        }
    }

    /// Format one character record.
    pub fn format_record(&self, record: &CharacterRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(record.id.to_string()),
        }
    }

    /// Format several records as a listing.
    pub fn format_records(&self, records: &[CharacterRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => {
                let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format the fields changed by an extraction.
    pub fn format_changes(&self, changes: &[FieldChange]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&changes_json(changes))?),
            OutputFormat::Table => Ok(self.format_changes_table(changes)),
            OutputFormat::Quiet => {
                let paths: Vec<&str> = changes.iter().map(|c| c.path.as_str()).collect();
                Ok(paths.join("\n"))
            }
        }
    }

    /// Format an extraction: its classification, changes and resulting record.
    pub fn format_extraction(
        &self,
        kind: OutputKind,
        record: &CharacterRecord,
        changes: &[FieldChange],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "kind": kind.as_str(),
                "record": record,
                "changes": changes_json(changes),
            }))?),
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}",
                self.format_changes_table(changes),
                self.format_record_table(record)
            )),
            OutputFormat::Quiet => Ok(record.id.to_string()),
        }
    }

    /// Format an A4 page plan.
    pub fn format_page_plan(&self, pages: &[PageSlice]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = pages
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "index": p.index,
                            "yOffsetMm": p.y_offset_mm,
                            "imageWidthMm": p.image_width_mm,
                            "imageHeightMm": p.image_height_mm,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Page", "Y offset (mm)", "Image width (mm)", "Image height (mm)"]);
                for page in pages {
                    builder.push_record([
                        (page.index + 1).to_string(),
                        format!("{:.2}", page.y_offset_mm),
                        format!("{:.2}", page.image_width_mm),
                        format!("{:.2}", page.image_height_mm),
                    ]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(pages.len().to_string()),
        }
    }

    fn format_record_table(&self, record: &CharacterRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["id", record.id.as_str()]);

        for path in FieldPath::ALL {
            let value = path.get(record);
            if !value.is_empty() {
                builder.push_record([path.as_str(), value]);
            }
        }

        let table = styled(builder);
        if record.is_blank() {
            format!("{}\n{}", table, self.colorize("No fields set.", "yellow"))
        } else {
            table
        }
    }

    fn format_records_table(&self, records: &[CharacterRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No characters found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Race", "Jobs", "Role"]);
        for record in records {
            builder.push_record([
                record.id.as_str(),
                record.display_name(),
                &record.race,
                &record.jobs,
                &record.role,
            ]);
        }
        styled(builder)
    }

    fn format_changes_table(&self, changes: &[FieldChange]) -> String {
        if changes.is_empty() {
            return self.colorize("No fields changed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Before", "After"]);
        for change in changes {
            builder.push_record([change.path.as_str(), &change.before, &change.after]);
        }
        styled(builder)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a reply from the generation service.
    pub fn reply(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn changes_json(changes: &[FieldChange]) -> Vec<serde_json::Value> {
    changes
        .iter()
        .map(|c| {
            serde_json::json!({
                "path": c.path.as_str(),
                "before": c.before,
                "after": c.after,
            })
        })
        .collect()
}
