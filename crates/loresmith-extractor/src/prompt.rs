//! Prompts sent to the generation service

use crate::sheet::render_sheet;
use loresmith_domain::CharacterRecord;

/// Builds the prompt for one chat turn
pub struct PromptBuilder {
    message: String,
    current: Option<CharacterRecord>,
}

impl PromptBuilder {
    /// Create a new prompt builder for a user message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            current: None,
        }
    }

    /// Include the sheet drafted so far, so the service can revise it
    pub fn with_record(mut self, record: &CharacterRecord) -> Self {
        self.current = Some(record.clone());
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and answer format
        prompt.push_str(SHEET_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The sheet so far (if any)
        if let Some(record) = self.current.as_ref().filter(|r| !r.is_blank()) {
            prompt.push_str("Current character sheet:\n");
            prompt.push_str("---\n");
            prompt.push_str(&render_sheet(record));
            prompt.push_str("\n---\n\n");
        }

        // 3. The user's message
        prompt.push_str("User message:\n");
        prompt.push_str(&self.message);
        prompt.push('\n');

        prompt
    }
}

const SHEET_INSTRUCTIONS: &str = r#"You are helping a writer design a character for their fictional world.
Chat naturally when the writer is brainstorming or asking questions.

When you draft or revise the character, answer with a character sheet using
these uppercase section headers, each followed by a colon:

NAME: RACE: JOBS: ROLE: PARENTS: PERSONALITY: BIO: EQUIPMENT: STYLE:
STATS: ABILITIES: NOTES: RELATIONSHIPS:

Inside sections use these labels:
- PERSONALITY: MBTI: (four letters), ENNEAGRAM: (e.g. 5w4), ALIGNMENT:, TRAITS:
- EQUIPMENT: WEAPON:, ARMOR:
- STATS: HP:, MP:, PHYS ATTACK:, PHYS DEFENSE:, AGILITY:, MAGIC ATTACK:, MAGIC DEFENSE:, RESIST: (whole numbers)
- ABILITIES: MAIN ABILITY:, SIGNATURE SKILLS:, PASSIVE ABILITIES:

Only include sections you are adding or changing. Never use a header word
followed by a colon inside prose."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_message_and_vocabulary() {
        let prompt = PromptBuilder::new("Make me a grumpy dwarf").build();
        assert!(prompt.contains("Make me a grumpy dwarf"));
        assert!(prompt.contains("PERSONALITY:"));
        assert!(!prompt.contains("Current character sheet"));
    }

    #[test]
    fn test_blank_record_is_not_included() {
        let prompt = PromptBuilder::new("hi")
            .with_record(&CharacterRecord::new())
            .build();
        assert!(!prompt.contains("Current character sheet"));
    }

    #[test]
    fn test_current_sheet_is_included() {
        let mut record = CharacterRecord::new();
        record.name = "Durin".to_string();
        let prompt = PromptBuilder::new("Give him a weapon")
            .with_record(&record)
            .build();
        assert!(prompt.contains("Current character sheet"));
        assert!(prompt.contains("NAME: Durin"));
        assert!(prompt.ends_with("Give him a weapon\n"));
    }
}
