//! Field-level patterns applied inside sections
//!
//! Every function here returns the assignments it could make. A label that
//! is missing, or whose value does not have the expected shape, simply
//! contributes nothing. Sub-labels are matched case-insensitively.

use crate::segment::next_header_at_or_after;
use loresmith_domain::FieldPath;
use regex::Regex;
use std::sync::LazyLock;

/// A field and the value extracted for it
pub(crate) type Assignment = (FieldPath, String);

// Personality
static MBTI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bMBTI\s*:\s*([A-Z]{4})").expect("valid regex"));
static ENNEAGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bENNEAGRAM\s*:\s*(\d+(?:w\d+)?)").expect("valid regex"));
static ALIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bALIGNMENT\s*:\s*([^,\n]+)").expect("valid regex"));
static TRAITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bTRAITS\s*:\s*").expect("valid regex"));
// Alignment written inline ("ALIGNMENT: Lawful Neutral TRAITS: ...") stops at the next label
static PERSONALITY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:MBTI|ENNEAGRAM|ALIGNMENT|TRAITS)\s*:").expect("valid regex")
});

// Stats. The physical patterns carry an optional `magic` prefix group so
// that "MAGIC DEFENSE: 9" is recognized and skipped rather than read as a
// bare "DEFENSE: 9".
static HP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:HP|HEALTH|HIT[\s_.-]*POINTS)\s*:\s*(?P<value>\d+)").expect("valid regex")
});
static MP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:MP|MANA|MAGIC[\s_.-]*POINTS)\s*:\s*(?P<value>\d+)").expect("valid regex")
});
static PHYS_ATTACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        (?P<magic>\bMAG(?:IC(?:AL)?)?[\s_.-]*)?
        \b(?:
            (?:PHYS(?:ICAL)?[\s_.-]*)?(?:ATTACK|ATK)
            | STR(?:ENGTH)?
        )
        \s*:\s*(?P<value>\d+)
        ",
    )
    .expect("valid regex")
});
static PHYS_DEFENSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        (?P<magic>\bMAG(?:IC(?:AL)?)?[\s_.-]*)?
        \b(?:
            (?:PHYS(?:ICAL)?[\s_.-]*)?DEF(?:ENSE|ENCE)?
            | VIT(?:ALITY)?
            | CON(?:STITUTION)?
        )
        \s*:\s*(?P<value>\d+)
        ",
    )
    .expect("valid regex")
});
static AGILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:AGI(?:LITY)?|SPD|SPEED|DEX(?:TERITY)?)\s*:\s*(?P<value>\d+)")
        .expect("valid regex")
});
static MAGIC_ATTACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:MAG(?:IC(?:AL)?)?[\s_.-]*(?:ATTACK|ATK)|INT(?:ELLIGENCE)?)\s*:\s*(?P<value>\d+)",
    )
    .expect("valid regex")
});
static MAGIC_DEFENSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:MAG(?:IC(?:AL)?)?[\s_.-]*DEF(?:ENSE|ENCE)?|WIS(?:DOM)?|SPIRIT|SPR)\s*:\s*(?P<value>\d+)",
    )
    .expect("valid regex")
});
static RESIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bRES(?:IST(?:ANCE)?)?\s*:\s*(?P<value>\d+)").expect("valid regex")
});

// Abilities
static MAIN_ABILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:MAIN|SPECIAL)[\s_-]*ABILITY\s*:\s*([^,\n]*)").expect("valid regex")
});
static SKILLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:SIGNATURE[\s_-]*)?SKILLS\s*:\s*").expect("valid regex")
});
static PASSIVE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPASSIVE").expect("valid regex"));
static PASSIVES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bPASSIVE(?:[\s_-]*ABILITIES|[\s_-]*SKILLS|S)\s*:\s*").expect("valid regex")
});

// Equipment
static WEAPON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWEAPONS?\s*:\s*([^,\n]*)").expect("valid regex"));
static ARMOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bARMOU?RS?\s*:\s*([^,\n]*)").expect("valid regex"));

/// Stat fields with the pattern that fills each
fn stat_rules() -> [(FieldPath, &'static Regex); 8] {
    [
        (FieldPath::Hp, &*HP_RE),
        (FieldPath::Mp, &*MP_RE),
        (FieldPath::PhysAttack, &*PHYS_ATTACK_RE),
        (FieldPath::PhysDefense, &*PHYS_DEFENSE_RE),
        (FieldPath::Agility, &*AGILITY_RE),
        (FieldPath::MagicAttack, &*MAGIC_ATTACK_RE),
        (FieldPath::MagicDefense, &*MAGIC_DEFENSE_RE),
        (FieldPath::Resist, &*RESIST_RE),
    ]
}

/// Push `value` trimmed, unless it is empty
fn assign(out: &mut Vec<Assignment>, path: FieldPath, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        out.push((path, value.to_string()));
    }
}

/// Whole-body sections: the trimmed body is the value
pub(crate) fn parse_scalar(path: FieldPath, body: &str) -> Vec<Assignment> {
    let mut out = Vec::new();
    assign(&mut out, path, body);
    out
}

/// PERSONALITY section
///
/// `traits_from` is where the personality header sits in the full text.
/// Traits are looked up from there in the full text and run to the next
/// header occurrence of any kind, so they may extend past `body`.
pub(crate) fn parse_personality(body: &str, text: &str, traits_from: usize) -> Vec<Assignment> {
    let mut out = Vec::new();

    if let Some(caps) = MBTI_RE.captures(body) {
        assign(&mut out, FieldPath::Mbti, &caps[1]);
    }

    if let Some(caps) = ENNEAGRAM_RE.captures(body) {
        assign(&mut out, FieldPath::Enneagram, &caps[1]);
    }

    if let Some(caps) = ALIGNMENT_RE.captures(body) {
        let raw = &caps[1];
        let value = match PERSONALITY_LABEL_RE.find(raw) {
            Some(label) => &raw[..label.start()],
            None => raw,
        };
        assign(&mut out, FieldPath::Alignment, value);
    }

    if let Some(value) = traits_after(text, traits_from) {
        assign(&mut out, FieldPath::Traits, value);
    }

    out
}

fn traits_after(text: &str, from: usize) -> Option<&str> {
    let rest = text.get(from..)?;
    let label = TRAITS_RE.find(rest)?;
    let start = from + label.end();
    let end = next_header_at_or_after(text, start).unwrap_or(text.len());
    text.get(start..end)
}

/// STATS section: each stat is a label synonym, a colon and digits
pub(crate) fn parse_stats(body: &str) -> Vec<Assignment> {
    let mut out = Vec::new();

    for (path, re) in stat_rules() {
        let value = re
            .captures_iter(body)
            .find(|caps| caps.name("magic").is_none())
            .and_then(|caps| caps.name("value"));
        if let Some(value) = value {
            assign(&mut out, path, value.as_str());
        }
    }

    out
}

/// ABILITIES section
pub(crate) fn parse_abilities(body: &str) -> Vec<Assignment> {
    let mut out = Vec::new();

    if let Some(caps) = MAIN_ABILITY_RE.captures(body) {
        assign(&mut out, FieldPath::MainAbility, &caps[1]);
    }

    // "PASSIVE SKILLS:" also ends in "SKILLS:"; skip those occurrences
    let skills = SKILLS_RE
        .find_iter(body)
        .find(|m| !preceded_by_passive(body, m.start()));
    if let Some(label) = skills {
        let rest = &body[label.end()..];
        let end = PASSIVE_MARKER_RE
            .find(rest)
            .map(|m| m.start())
            .unwrap_or(rest.len());
        assign(&mut out, FieldPath::SignatureSkills, &rest[..end]);
    }

    if let Some(label) = PASSIVES_RE.find(body) {
        assign(&mut out, FieldPath::Passives, &body[label.end()..]);
    }

    out
}

fn preceded_by_passive(body: &str, at: usize) -> bool {
    let before = body[..at].trim_end_matches(|c: char| c.is_whitespace() || c == '_' || c == '-');
    let Some(head) = before.len().checked_sub(7).and_then(|start| before.get(..start)) else {
        return false;
    };
    let tail = &before[head.len()..];
    tail.eq_ignore_ascii_case("PASSIVE") && !head.ends_with(|c: char| c.is_alphanumeric())
}

/// EQUIPMENT section
pub(crate) fn parse_equipment(body: &str) -> Vec<Assignment> {
    let mut out = Vec::new();

    if let Some(caps) = WEAPON_RE.captures(body) {
        assign(&mut out, FieldPath::Weapon, &caps[1]);
    }

    if let Some(caps) = ARMOR_RE.captures(body) {
        assign(&mut out, FieldPath::Armor, &caps[1]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(assignments: &[Assignment], path: FieldPath) -> Option<&str> {
        assignments
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_scalar_trims_and_skips_empty() {
        assert_eq!(
            parse_scalar(FieldPath::Name, "  Rex \n"),
            vec![(FieldPath::Name, "Rex".to_string())]
        );
        assert!(parse_scalar(FieldPath::Name, "   ").is_empty());
    }

    #[test]
    fn test_personality_inline() {
        let text = "PERSONALITY: MBTI: INTJ ENNEAGRAM: 5w4 ALIGNMENT: Lawful Neutral TRAITS: calm, precise";
        let body = &text["PERSONALITY:".len()..];
        let got = parse_personality(body, text, 0);
        assert_eq!(value_of(&got, FieldPath::Mbti), Some("INTJ"));
        assert_eq!(value_of(&got, FieldPath::Enneagram), Some("5w4"));
        assert_eq!(value_of(&got, FieldPath::Alignment), Some("Lawful Neutral"));
        assert_eq!(value_of(&got, FieldPath::Traits), Some("calm, precise"));
    }

    #[test]
    fn test_personality_labels_case_insensitive() {
        let text = "PERSONALITY:\nmbti: enfp\nEnneagram: 7\nalignment: chaotic good, mostly";
        let body = &text["PERSONALITY:".len()..];
        let got = parse_personality(body, text, 0);
        assert_eq!(value_of(&got, FieldPath::Mbti), Some("enfp"));
        assert_eq!(value_of(&got, FieldPath::Enneagram), Some("7"));
        assert_eq!(value_of(&got, FieldPath::Alignment), Some("chaotic good"));
        assert_eq!(value_of(&got, FieldPath::Traits), None);
    }

    #[test]
    fn test_traits_read_past_section_boundary() {
        let text = "PERSONALITY: MBTI: ISTP\nSTYLE: leather\nTRAITS: quiet, loyal\nNOTES: none";
        let body = "MBTI: ISTP\n";
        let got = parse_personality(body, text, 0);
        assert_eq!(value_of(&got, FieldPath::Traits), Some("quiet, loyal"));
    }

    #[test]
    fn test_traits_stop_at_repeated_header() {
        let text = "PERSONALITY: TRAITS: brave NAME: again";
        let body = &text["PERSONALITY:".len()..];
        let got = parse_personality(body, text, 0);
        assert_eq!(value_of(&got, FieldPath::Traits), Some("brave"));
    }

    #[test]
    fn test_traits_label_needs_word_boundary() {
        let text = "PERSONALITY: MBTI: INTJ\nNOTES: PORTRAITS: two";
        let body = "MBTI: INTJ\n";
        let got = parse_personality(body, text, 0);
        assert_eq!(value_of(&got, FieldPath::Mbti), Some("INTJ"));
        assert_eq!(value_of(&got, FieldPath::Traits), None);
    }

    #[test]
    fn test_malformed_personality_values_skipped() {
        let text = "PERSONALITY: MBTI: IN ENNEAGRAM: five";
        let body = &text["PERSONALITY:".len()..];
        let got = parse_personality(body, text, 0);
        assert!(got.is_empty());
    }

    #[test]
    fn test_stats_basic() {
        let got = parse_stats(" HP: 50 MP: 20");
        assert_eq!(value_of(&got, FieldPath::Hp), Some("50"));
        assert_eq!(value_of(&got, FieldPath::Mp), Some("20"));
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_stats_synonyms() {
        let body = "Strength: 14\nPhysical Defense: 11\nSPD: 9\nIntelligence: 16\nMagic Def: 8\nRESISTANCE: 5\nhealth: 90\nmana: 40";
        let got = parse_stats(body);
        assert_eq!(value_of(&got, FieldPath::PhysAttack), Some("14"));
        assert_eq!(value_of(&got, FieldPath::PhysDefense), Some("11"));
        assert_eq!(value_of(&got, FieldPath::Agility), Some("9"));
        assert_eq!(value_of(&got, FieldPath::MagicAttack), Some("16"));
        assert_eq!(value_of(&got, FieldPath::MagicDefense), Some("8"));
        assert_eq!(value_of(&got, FieldPath::Resist), Some("5"));
        assert_eq!(value_of(&got, FieldPath::Hp), Some("90"));
        assert_eq!(value_of(&got, FieldPath::Mp), Some("40"));
    }

    #[test]
    fn test_stats_separators() {
        let got = parse_stats("PHYS_ATTACK: 12, MAGIC-ATTACK: 30, PHYS.DEF: 7");
        assert_eq!(value_of(&got, FieldPath::PhysAttack), Some("12"));
        assert_eq!(value_of(&got, FieldPath::MagicAttack), Some("30"));
        assert_eq!(value_of(&got, FieldPath::PhysDefense), Some("7"));
    }

    #[test]
    fn test_magic_stats_do_not_fill_physical_ones() {
        let got = parse_stats("MAGIC ATTACK: 30\nMAGIC DEFENSE: 25");
        assert_eq!(value_of(&got, FieldPath::MagicAttack), Some("30"));
        assert_eq!(value_of(&got, FieldPath::MagicDefense), Some("25"));
        assert_eq!(value_of(&got, FieldPath::PhysAttack), None);
        assert_eq!(value_of(&got, FieldPath::PhysDefense), None);
    }

    #[test]
    fn test_physical_found_after_magic() {
        let got = parse_stats("MAGIC DEFENSE: 25, DEFENSE: 12");
        assert_eq!(value_of(&got, FieldPath::PhysDefense), Some("12"));
    }

    #[test]
    fn test_non_numeric_stat_is_no_match() {
        let got = parse_stats("HP: lots MP: ~20");
        assert!(got.is_empty());
    }

    #[test]
    fn test_abilities_inline() {
        let got = parse_abilities(" MAIN ABILITY: Fireball, SKILLS: Dash, Heal PASSIVE ABILITIES: Regen");
        assert_eq!(value_of(&got, FieldPath::MainAbility), Some("Fireball"));
        assert_eq!(value_of(&got, FieldPath::SignatureSkills), Some("Dash, Heal"));
        assert_eq!(value_of(&got, FieldPath::Passives), Some("Regen"));
    }

    #[test]
    fn test_abilities_multiline_variants() {
        let body = "\nSpecial Ability: Shadow Step\nSignature Skills: Backstab, Vanish\nPassives: Night Vision";
        let got = parse_abilities(body);
        assert_eq!(value_of(&got, FieldPath::MainAbility), Some("Shadow Step"));
        assert_eq!(value_of(&got, FieldPath::SignatureSkills), Some("Backstab, Vanish"));
        assert_eq!(value_of(&got, FieldPath::Passives), Some("Night Vision"));
    }

    #[test]
    fn test_passive_skills_not_read_as_signature_skills() {
        let got = parse_abilities("PASSIVE SKILLS: Thick Hide");
        assert_eq!(value_of(&got, FieldPath::SignatureSkills), None);
        assert_eq!(value_of(&got, FieldPath::Passives), Some("Thick Hide"));
    }

    #[test]
    fn test_word_containing_passive_does_not_cut_skills() {
        let got = parse_abilities("SKILLS: Impassive Stare, Dash");
        assert_eq!(value_of(&got, FieldPath::SignatureSkills), Some("Impassive Stare, Dash"));
        assert_eq!(value_of(&got, FieldPath::Passives), None);

        let got = parse_abilities("IMPASSIVE SKILLS: Glare
Passives: Calm");
        assert_eq!(value_of(&got, FieldPath::SignatureSkills), Some("Glare"));
        assert_eq!(value_of(&got, FieldPath::Passives), Some("Calm"));
    }

    #[test]
    fn test_equipment() {
        let got = parse_equipment(" WEAPON: Longsword, ARMOUR: Chainmail\n");
        assert_eq!(value_of(&got, FieldPath::Weapon), Some("Longsword"));
        assert_eq!(value_of(&got, FieldPath::Armor), Some("Chainmail"));

        let got = parse_equipment("Weapons: twin daggers\nArmors: none");
        assert_eq!(value_of(&got, FieldPath::Weapon), Some("twin daggers"));
        assert_eq!(value_of(&got, FieldPath::Armor), Some("none"));
    }

    #[test]
    fn test_equipment_missing_labels() {
        assert!(parse_equipment("a rusty sword and a cloak").is_empty());
    }
}
