//! Loresmith Extractor
//!
//! Turns replies from a text generation service into character sheets.
//!
//! # Overview
//!
//! A reply is either ordinary conversation or a character sheet tagged with
//! uppercase section headers (`NAME:`, `STATS:`, ...). The classifier tells
//! the two apart. For sheets, the segmenter splits the reply into sections
//! by header position, field patterns pick values out of each section, and
//! the results are merged over the record drafted so far.
//!
//! # Architecture
//!
//! ```text
//! Message → PromptBuilder → GenerationService → classify → segment → fields → merge
//! ```
//!
//! # Key Features
//!
//! - **Merge, not replace**: fields absent from a reply keep their value
//! - **Offset ordering**: sections are bounded by where headers occur, not
//!   by the order headers are declared in
//! - **No failure mode**: malformed sections are skipped, never reported
//! - **Chat sessions**: stale replies are dropped after a reset
//!
//! # Example Usage
//!
//! ```
//! use loresmith_domain::CharacterRecord;
//! use loresmith_extractor::{classify_output, extract_character_fields, OutputKind};
//!
//! let reply = "NAME: Rex\nRACE: Orc\nSTATS: HP: 50 MP: 20";
//! assert_eq!(classify_output(reply), OutputKind::Character);
//!
//! let record = extract_character_fields(reply, &CharacterRecord::new());
//! assert_eq!(record.name, "Rex");
//! assert_eq!(record.race, "Orc");
//! assert_eq!(record.stats.hp, "50");
//! ```

#![warn(missing_docs)]

mod classify;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod segment;
mod session;
mod sheet;
mod types;


pub use classify::classify_output;
pub use config::SessionConfig;
pub use error::SessionError;
pub use extractor::{extract_character_fields, extract_with_report};
pub use prompt::PromptBuilder;
pub use segment::segment;
pub use session::ChatSession;
pub use sheet::render_sheet;
pub use types::{Extraction, OutputKind, Section, SectionHeader, Turn, TurnOutcome};
