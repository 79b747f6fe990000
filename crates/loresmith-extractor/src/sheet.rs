//! Render a record back into the header vocabulary

use loresmith_domain::CharacterRecord;

/// Write `record` as a character sheet the extractor can read back
///
/// Empty fields and empty blocks are left out. Single-line values survive
/// a render/extract cycle; values containing header tokens, line breaks in
/// line-delimited fields, or non-numeric stats do not.
pub fn render_sheet(record: &CharacterRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_line(&mut lines, "NAME:", &record.name);
    push_line(&mut lines, "RACE:", &record.race);
    push_line(&mut lines, "JOBS:", &record.jobs);
    push_line(&mut lines, "ROLE:", &record.role);
    push_line(&mut lines, "PARENTS:", &record.parents);

    let p = &record.personality;
    push_block(
        &mut lines,
        "PERSONALITY:",
        &[
            ("MBTI:", &p.mbti),
            ("ENNEAGRAM:", &p.enneagram),
            ("ALIGNMENT:", &p.alignment),
            ("TRAITS:", &p.traits),
        ],
    );

    push_line(&mut lines, "BIO:", &record.bio);

    let e = &record.equipment;
    push_block(&mut lines, "EQUIPMENT:", &[("WEAPON:", &e.weapon), ("ARMOR:", &e.armor)]);

    push_line(&mut lines, "STYLE:", &record.style);

    let s = &record.stats;
    push_block(
        &mut lines,
        "STATS:",
        &[
            ("HP:", &s.hp),
            ("MP:", &s.mp),
            ("PHYS ATTACK:", &s.phys_attack),
            ("PHYS DEFENSE:", &s.phys_defense),
            ("AGILITY:", &s.agility),
            ("MAGIC ATTACK:", &s.magic_attack),
            ("MAGIC DEFENSE:", &s.magic_defense),
            ("RESIST:", &s.resist),
        ],
    );

    let a = &record.abilities;
    push_block(
        &mut lines,
        "ABILITIES:",
        &[
            ("MAIN ABILITY:", &a.main_ability),
            ("SIGNATURE SKILLS:", &a.signature_skills),
            ("PASSIVE ABILITIES:", &a.passives),
        ],
    );

    push_line(&mut lines, "NOTES:", &record.notes);
    push_line(&mut lines, "RELATIONSHIPS:", &record.relationships);

    lines.join("\n")
}

fn push_line(lines: &mut Vec<String>, header: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(format!("{} {}", header, value));
    }
}

fn push_block(lines: &mut Vec<String>, header: &str, entries: &[(&str, &String)]) {
    let present: Vec<_> = entries
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();
    if present.is_empty() {
        return;
    }

    lines.push(header.to_string());
    for (label, value) in present {
        lines.push(format!("{} {}", label, value.trim()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify_output, extract_character_fields, OutputKind};

    fn sample() -> CharacterRecord {
        let mut record = CharacterRecord::new();
        record.name = "Rex".to_string();
        record.race = "Orc".to_string();
        record.jobs = "Blacksmith".to_string();
        record.bio = "Raised by wolves near the river.".to_string();
        record.personality.mbti = "INTJ".to_string();
        record.personality.enneagram = "5w4".to_string();
        record.personality.alignment = "Lawful Neutral".to_string();
        record.personality.traits = "calm, precise".to_string();
        record.equipment.weapon = "Warhammer".to_string();
        record.stats.hp = "50".to_string();
        record.stats.phys_defense = "14".to_string();
        record.stats.magic_defense = "3".to_string();
        record.abilities.main_ability = "Quake".to_string();
        record.abilities.signature_skills = "Cleave, Roar".to_string();
        record.abilities.passives = "Thick Hide".to_string();
        record
    }

    #[test]
    fn test_blank_record_renders_empty() {
        assert_eq!(render_sheet(&CharacterRecord::new()), "");
    }

    #[test]
    fn test_empty_blocks_are_omitted() {
        let mut record = CharacterRecord::new();
        record.name = "Rex".to_string();
        let sheet = render_sheet(&record);
        assert_eq!(sheet, "NAME: Rex");
        assert!(!sheet.contains("STATS:"));
    }

    #[test]
    fn test_rendered_sheet_reads_back() {
        let original = sample();
        let sheet = render_sheet(&original);
        assert_eq!(classify_output(&sheet), OutputKind::Character);

        let blank = CharacterRecord::with_id(original.id.clone());
        let parsed = extract_character_fields(&sheet, &blank);
        assert_eq!(parsed, original);
    }
}
