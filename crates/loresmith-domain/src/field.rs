//! Leaf-field addressing and record diffs

use crate::character::CharacterRecord;
use std::fmt;

/// Dotted address of one leaf field of a [`CharacterRecord`]
///
/// The identifier is not a leaf: it never changes during a record's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// `name`
    Name,
    /// `race`
    Race,
    /// `jobs`
    Jobs,
    /// `role`
    Role,
    /// `parents`
    Parents,
    /// `bio`
    Bio,
    /// `style`
    Style,
    /// `notes`
    Notes,
    /// `relationships`
    Relationships,
    /// `personality.mbti`
    Mbti,
    /// `personality.enneagram`
    Enneagram,
    /// `personality.alignment`
    Alignment,
    /// `personality.traits`
    Traits,
    /// `equipment.weapon`
    Weapon,
    /// `equipment.armor`
    Armor,
    /// `stats.hp`
    Hp,
    /// `stats.mp`
    Mp,
    /// `stats.physAttack`
    PhysAttack,
    /// `stats.physDefense`
    PhysDefense,
    /// `stats.agility`
    Agility,
    /// `stats.magicAttack`
    MagicAttack,
    /// `stats.magicDefense`
    MagicDefense,
    /// `stats.resist`
    Resist,
    /// `abilities.mainAbility`
    MainAbility,
    /// `abilities.signatureSkills`
    SignatureSkills,
    /// `abilities.passives`
    Passives,
}

impl FieldPath {
    /// Every leaf, in record declaration order
    pub const ALL: [FieldPath; 26] = [
        FieldPath::Name,
        FieldPath::Race,
        FieldPath::Jobs,
        FieldPath::Role,
        FieldPath::Parents,
        FieldPath::Bio,
        FieldPath::Style,
        FieldPath::Notes,
        FieldPath::Relationships,
        FieldPath::Mbti,
        FieldPath::Enneagram,
        FieldPath::Alignment,
        FieldPath::Traits,
        FieldPath::Weapon,
        FieldPath::Armor,
        FieldPath::Hp,
        FieldPath::Mp,
        FieldPath::PhysAttack,
        FieldPath::PhysDefense,
        FieldPath::Agility,
        FieldPath::MagicAttack,
        FieldPath::MagicDefense,
        FieldPath::Resist,
        FieldPath::MainAbility,
        FieldPath::SignatureSkills,
        FieldPath::Passives,
    ];

    /// The dotted path, matching the JSON key layout
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::Name => "name",
            FieldPath::Race => "race",
            FieldPath::Jobs => "jobs",
            FieldPath::Role => "role",
            FieldPath::Parents => "parents",
            FieldPath::Bio => "bio",
            FieldPath::Style => "style",
            FieldPath::Notes => "notes",
            FieldPath::Relationships => "relationships",
            FieldPath::Mbti => "personality.mbti",
            FieldPath::Enneagram => "personality.enneagram",
            FieldPath::Alignment => "personality.alignment",
            FieldPath::Traits => "personality.traits",
            FieldPath::Weapon => "equipment.weapon",
            FieldPath::Armor => "equipment.armor",
            FieldPath::Hp => "stats.hp",
            FieldPath::Mp => "stats.mp",
            FieldPath::PhysAttack => "stats.physAttack",
            FieldPath::PhysDefense => "stats.physDefense",
            FieldPath::Agility => "stats.agility",
            FieldPath::MagicAttack => "stats.magicAttack",
            FieldPath::MagicDefense => "stats.magicDefense",
            FieldPath::Resist => "stats.resist",
            FieldPath::MainAbility => "abilities.mainAbility",
            FieldPath::SignatureSkills => "abilities.signatureSkills",
            FieldPath::Passives => "abilities.passives",
        }
    }

    /// Parse a dotted path
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|path| path.as_str() == s)
    }

    /// Read the field from a record
    pub fn get<'a>(&self, record: &'a CharacterRecord) -> &'a str {
        self.slot(record)
    }

    /// Overwrite the field on a record
    pub fn set(&self, record: &mut CharacterRecord, value: impl Into<String>) {
        *self.slot_mut(record) = value.into();
    }

    fn slot<'a>(&self, r: &'a CharacterRecord) -> &'a String {
        match self {
            FieldPath::Name => &r.name,
            FieldPath::Race => &r.race,
            FieldPath::Jobs => &r.jobs,
            FieldPath::Role => &r.role,
            FieldPath::Parents => &r.parents,
            FieldPath::Bio => &r.bio,
            FieldPath::Style => &r.style,
            FieldPath::Notes => &r.notes,
            FieldPath::Relationships => &r.relationships,
            FieldPath::Mbti => &r.personality.mbti,
            FieldPath::Enneagram => &r.personality.enneagram,
            FieldPath::Alignment => &r.personality.alignment,
            FieldPath::Traits => &r.personality.traits,
            FieldPath::Weapon => &r.equipment.weapon,
            FieldPath::Armor => &r.equipment.armor,
            FieldPath::Hp => &r.stats.hp,
            FieldPath::Mp => &r.stats.mp,
            FieldPath::PhysAttack => &r.stats.phys_attack,
            FieldPath::PhysDefense => &r.stats.phys_defense,
            FieldPath::Agility => &r.stats.agility,
            FieldPath::MagicAttack => &r.stats.magic_attack,
            FieldPath::MagicDefense => &r.stats.magic_defense,
            FieldPath::Resist => &r.stats.resist,
            FieldPath::MainAbility => &r.abilities.main_ability,
            FieldPath::SignatureSkills => &r.abilities.signature_skills,
            FieldPath::Passives => &r.abilities.passives,
        }
    }

    fn slot_mut<'a>(&self, r: &'a mut CharacterRecord) -> &'a mut String {
        match self {
            FieldPath::Name => &mut r.name,
            FieldPath::Race => &mut r.race,
            FieldPath::Jobs => &mut r.jobs,
            FieldPath::Role => &mut r.role,
            FieldPath::Parents => &mut r.parents,
            FieldPath::Bio => &mut r.bio,
            FieldPath::Style => &mut r.style,
            FieldPath::Notes => &mut r.notes,
            FieldPath::Relationships => &mut r.relationships,
            FieldPath::Mbti => &mut r.personality.mbti,
            FieldPath::Enneagram => &mut r.personality.enneagram,
            FieldPath::Alignment => &mut r.personality.alignment,
            FieldPath::Traits => &mut r.personality.traits,
            FieldPath::Weapon => &mut r.equipment.weapon,
            FieldPath::Armor => &mut r.equipment.armor,
            FieldPath::Hp => &mut r.stats.hp,
            FieldPath::Mp => &mut r.stats.mp,
            FieldPath::PhysAttack => &mut r.stats.phys_attack,
            FieldPath::PhysDefense => &mut r.stats.phys_defense,
            FieldPath::Agility => &mut r.stats.agility,
            FieldPath::MagicAttack => &mut r.stats.magic_attack,
            FieldPath::MagicDefense => &mut r.stats.magic_defense,
            FieldPath::Resist => &mut r.stats.resist,
            FieldPath::MainAbility => &mut r.abilities.main_ability,
            FieldPath::SignatureSkills => &mut r.abilities.signature_skills,
            FieldPath::Passives => &mut r.abilities.passives,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leaf field whose value differs between two record versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Which field changed
    pub path: FieldPath,
    /// Value in the older version
    pub before: String,
    /// Value in the newer version
    pub after: String,
}

impl CharacterRecord {
    /// List leaf fields that differ between `old` and `new`
    ///
    /// Changes come back in declaration order. Extraction never reports
    /// failures, so this is how a caller finds out what a pass touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use loresmith_domain::{CharacterRecord, FieldPath};
    ///
    /// let old = CharacterRecord::new();
    /// let mut new = old.clone();
    /// new.stats.hp = "50".to_string();
    ///
    /// let changes = CharacterRecord::diff(&old, &new);
    /// assert_eq!(changes.len(), 1);
    /// assert_eq!(changes[0].path, FieldPath::Hp);
    /// ```
    pub fn diff(old: &CharacterRecord, new: &CharacterRecord) -> Vec<FieldChange> {
        FieldPath::ALL
            .iter()
            .filter_map(|path| {
                let before = path.get(old);
                let after = path.get(new);
                (before != after).then(|| FieldChange {
                    path: *path,
                    before: before.to_string(),
                    after: after.to_string(),
                })
            })
            .collect()
    }
}
