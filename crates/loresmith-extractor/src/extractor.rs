//! Merge a character-sheet reply into an existing record

use crate::parser::{
    parse_abilities, parse_equipment, parse_personality, parse_scalar, parse_stats, Assignment,
};
use crate::segment::segment;
use crate::types::{Extraction, Section, SectionHeader};
use loresmith_domain::{CharacterRecord, FieldPath};
use tracing::debug;

/// Extract fields from `text` and merge them over `current`
///
/// Returns a new record. Fields the text does not provide keep their value
/// from `current`. This never fails: anything that does not match is left
/// alone.
///
/// # Examples
///
/// ```
/// use loresmith_domain::CharacterRecord;
/// use loresmith_extractor::extract_character_fields;
///
/// let blank = CharacterRecord::new();
/// let record = extract_character_fields("NAME: Rex\nRACE: Orc\nSTATS: HP: 50 MP: 20", &blank);
/// assert_eq!(record.name, "Rex");
/// assert_eq!(record.stats.mp, "20");
/// assert_eq!(record.id, blank.id);
/// ```
pub fn extract_character_fields(text: &str, current: &CharacterRecord) -> CharacterRecord {
    extract_with_report(text, current).record
}

/// Like [`extract_character_fields`], but also reports the sections found
/// and the fields that changed
pub fn extract_with_report(text: &str, current: &CharacterRecord) -> Extraction {
    let sections = segment(text);
    let mut record = current.clone();
    let mut bio_taken = false;

    for section in &sections {
        let assignments = section_assignments(section, text, &mut bio_taken);
        for (path, value) in assignments {
            path.set(&mut record, value);
        }
    }

    let changes = CharacterRecord::diff(current, &record);

    debug!(
        "Extracted {} sections, {} fields changed",
        sections.len(),
        changes.len()
    );

    Extraction {
        record,
        sections,
        changes,
    }
}

fn section_assignments(section: &Section, text: &str, bio_taken: &mut bool) -> Vec<Assignment> {
    let body = section.body(text);

    match section.header {
        SectionHeader::Name => parse_scalar(FieldPath::Name, body),
        SectionHeader::Race => parse_scalar(FieldPath::Race, body),
        SectionHeader::Jobs => parse_scalar(FieldPath::Jobs, body),
        SectionHeader::Role => parse_scalar(FieldPath::Role, body),
        SectionHeader::Parents => parse_scalar(FieldPath::Parents, body),
        SectionHeader::Style => parse_scalar(FieldPath::Style, body),
        SectionHeader::Notes => parse_scalar(FieldPath::Notes, body),
        SectionHeader::Relationships => parse_scalar(FieldPath::Relationships, body),
        SectionHeader::Bio | SectionHeader::Biography => {
            // Sections arrive in text order, so the earlier of the two wins
            if *bio_taken {
                return Vec::new();
            }
            let assignments = parse_scalar(FieldPath::Bio, body);
            *bio_taken = !assignments.is_empty();
            assignments
        }
        SectionHeader::Personality => parse_personality(body, text, section.offset),
        SectionHeader::Stats => parse_stats(body),
        SectionHeader::Abilities => parse_abilities(body),
        SectionHeader::Equipment => parse_equipment(body),
    }
}
