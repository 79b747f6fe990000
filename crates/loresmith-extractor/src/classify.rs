//! Decide whether a reply is a character sheet

use crate::types::{OutputKind, SectionHeader};

/// Classify a reply from the generation service
///
/// Any recognized header token anywhere in the text makes it a character
/// sheet. Everything else, including empty input, is plain conversation.
///
/// # Examples
///
/// ```
/// use loresmith_extractor::{classify_output, OutputKind};
///
/// assert_eq!(classify_output("NAME: Rex"), OutputKind::Character);
/// assert_eq!(classify_output("Tell me more."), OutputKind::Plain);
/// ```
pub fn classify_output(text: &str) -> OutputKind {
    let has_header = SectionHeader::ALL
        .iter()
        .any(|header| text.contains(header.token()));

    if has_header {
        OutputKind::Character
    } else {
        OutputKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_plain() {
        assert_eq!(classify_output(""), OutputKind::Plain);
        assert_eq!(classify_output("   \n\t"), OutputKind::Plain);
    }

    #[test]
    fn test_every_header_classifies_as_character() {
        for header in SectionHeader::ALL {
            let text = format!("Here you go!\n{} something", header.token());
            assert_eq!(classify_output(&text), OutputKind::Character, "{}", header);
        }
    }

    #[test]
    fn test_lowercase_header_is_plain() {
        assert_eq!(classify_output("name: Rex, race: Orc"), OutputKind::Plain);
    }

    #[test]
    fn test_header_without_colon_is_plain() {
        assert_eq!(classify_output("NAME Rex and his STATS"), OutputKind::Plain);
    }

    #[test]
    fn test_conversational_reply_is_plain() {
        assert_eq!(
            classify_output("Sure, tell me more about your character idea."),
            OutputKind::Plain
        );
    }
}
