//! Split a reply into header-delimited sections
//!
//! This pass runs before any field-level pattern. It only decides where
//! each section starts and ends.

use crate::types::{Section, SectionHeader};

/// Find the sections of `text`, ordered by where their headers occur
///
/// Only the first occurrence of each header counts. A section's body runs
/// from the end of its header to the start of the next found header, or to
/// the end of the text. A header token inside another section's prose still
/// starts a new section.
///
/// # Examples
///
/// ```
/// use loresmith_extractor::{segment, SectionHeader};
///
/// let text = "STATS: HP: 10\nNAME: Rex";
/// let sections = segment(text);
/// assert_eq!(sections[0].header, SectionHeader::Stats);
/// assert_eq!(sections[0].body(text), "HP: 10");
/// assert_eq!(sections[1].body(text), "Rex");
/// ```
pub fn segment(text: &str) -> Vec<Section> {
    let mut found: Vec<(SectionHeader, usize)> = SectionHeader::ALL
        .iter()
        .filter_map(|header| text.find(header.token()).map(|offset| (*header, offset)))
        .collect();

    found.sort_by_key(|(_, offset)| *offset);

    found
        .iter()
        .enumerate()
        .map(|(i, (header, offset))| {
            let start = offset + header.token().len();
            let end = found
                .get(i + 1)
                .map(|(_, next)| *next)
                .unwrap_or(text.len())
                .max(start);
            Section {
                header: *header,
                offset: *offset,
                body: start..end,
            }
        })
        .collect()
}

/// Byte offset of the earliest header token at or after `from`
///
/// Unlike [`segment`], every occurrence counts here, not only the first.
pub(crate) fn next_header_at_or_after(text: &str, from: usize) -> Option<usize> {
    let rest = text.get(from..)?;
    SectionHeader::ALL
        .iter()
        .filter_map(|header| rest.find(header.token()))
        .min()
        .map(|pos| from + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headers_no_sections() {
        assert!(segment("just talking about a knight").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_sections_follow_text_order() {
        let text = "RELATIONSHIPS: none\nNAME: Rex\nBIO: born in a ditch";
        let headers: Vec<_> = segment(text).iter().map(|s| s.header).collect();
        assert_eq!(
            headers,
            vec![
                SectionHeader::Relationships,
                SectionHeader::Name,
                SectionHeader::Bio
            ]
        );
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let text = "NAME: Rex\nNOTES: likes\nrain";
        let sections = segment(text);
        assert_eq!(sections[1].body(text), "likes\nrain");
    }

    #[test]
    fn test_repeated_header_only_first_counts() {
        let text = "NAME: Rex\nRACE: Orc\nNAME: Other";
        let sections = segment(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body(text), "Rex");
        // The second NAME: is just text inside the RACE section
        assert_eq!(sections[1].body(text), "Orc\nNAME: Other");
    }

    #[test]
    fn test_header_inside_prose_splits_section() {
        let text = "BIO: She changed her STYLE: often.\nRACE: Elf";
        let sections = segment(text);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].body(text), "She changed her");
        assert_eq!(sections[1].header, SectionHeader::Style);
        assert_eq!(sections[1].body(text), "often.");
    }

    #[test]
    fn test_headers_are_case_sensitive() {
        assert!(segment("name: Rex").is_empty());
        assert!(segment("Name: Rex").is_empty());
    }

    #[test]
    fn test_empty_body() {
        let text = "NAME:RACE: Orc";
        let sections = segment(text);
        assert_eq!(sections[0].body(text), "");
        assert_eq!(sections[1].body(text), "Orc");
    }

    #[test]
    fn test_next_header_counts_every_occurrence() {
        let text = "NAME: a TRAITS: x NAME: b";
        assert_eq!(next_header_at_or_after(text, 1), Some(18));
        assert_eq!(next_header_at_or_after(text, 19), None);
        assert_eq!(next_header_at_or_after(text, 500), None);
    }
}
