//! Character module - the sheet a chat session builds up

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a character record
///
/// Generated as a UUIDv7 string so ids sort by creation time, but callers
/// must not rely on the format: ids loaded from a store are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    /// Generate a fresh identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use loresmith_domain::CharacterId;
    ///
    /// let id = CharacterId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an existing identifier
    ///
    /// Returns an error for empty or whitespace-only input.
    pub fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("character id must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personality block of a character sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    /// Myers-Briggs type, e.g. `INTJ`
    pub mbti: String,
    /// Enneagram type with optional wing, e.g. `5w4`
    pub enneagram: String,
    /// Alignment, e.g. `Lawful Neutral`
    pub alignment: String,
    /// Free-form trait list
    pub traits: String,
}

/// Equipment block of a character sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    /// Main weapon
    pub weapon: String,
    /// Worn armor
    pub armor: String,
}

/// Stat block of a character sheet
///
/// Values are kept as text so partial or non-numeric input entered by hand
/// survives a save/load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    /// Hit points
    pub hp: String,
    /// Mana points
    pub mp: String,
    /// Physical attack
    pub phys_attack: String,
    /// Physical defense
    pub phys_defense: String,
    /// Agility
    pub agility: String,
    /// Magic attack
    pub magic_attack: String,
    /// Magic defense
    pub magic_defense: String,
    /// Resistance
    pub resist: String,
}

/// Abilities block of a character sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Abilities {
    /// Main (or special) ability
    pub main_ability: String,
    /// Signature skills
    pub signature_skills: String,
    /// Passive abilities
    pub passives: String,
}

/// One character's sheet
///
/// Records are treated as snapshots: extraction reads one and returns a new
/// one, and the owner swaps its current reference afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterRecord {
    /// Stable identifier for the record's lifetime
    pub id: CharacterId,
    /// Character name
    pub name: String,
    /// Race or species
    pub race: String,
    /// Jobs or classes
    pub jobs: String,
    /// Story role
    pub role: String,
    /// Parentage
    pub parents: String,
    /// Biography
    pub bio: String,
    /// Visual style
    pub style: String,
    /// Free notes
    pub notes: String,
    /// Relationships to other characters
    pub relationships: String,
    /// Personality block
    pub personality: Personality,
    /// Equipment block
    pub equipment: Equipment,
    /// Stat block
    pub stats: Stats,
    /// Abilities block
    pub abilities: Abilities,
}

impl CharacterRecord {
    /// Create a record with a fresh id and every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with a known id
    pub fn with_id(id: CharacterId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// True when no leaf field holds any text
    pub fn is_blank(&self) -> bool {
        crate::field::FieldPath::ALL
            .iter()
            .all(|path| path.get(self).is_empty())
    }

    /// Short label for listings: the name, or a placeholder
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "(unnamed)"
        } else {
            self.name.trim()
        }
    }
}
