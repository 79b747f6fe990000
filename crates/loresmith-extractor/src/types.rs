//! Types shared by the classifier, segmenter and session

use loresmith_domain::{CharacterRecord, FieldChange};
use std::fmt;
use std::ops::Range;

/// How a reply from the generation service should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Contains at least one section header: treat as a character sheet
    Character,
    /// Ordinary conversational text
    Plain,
}

impl OutputKind {
    /// Lowercase name, as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Character => "character",
            OutputKind::Plain => "plain",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized top-level section header
///
/// Headers are matched case-sensitively as literal tokens including the
/// trailing colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionHeader {
    /// `NAME:`
    Name,
    /// `RACE:`
    Race,
    /// `JOBS:`
    Jobs,
    /// `ROLE:`
    Role,
    /// `PARENTS:`
    Parents,
    /// `PERSONALITY:`
    Personality,
    /// `BIO:`
    Bio,
    /// `BIOGRAPHY:`
    Biography,
    /// `EQUIPMENT:`
    Equipment,
    /// `STYLE:`
    Style,
    /// `STATS:`
    Stats,
    /// `ABILITIES:`
    Abilities,
    /// `NOTES:`
    Notes,
    /// `RELATIONSHIPS:`
    Relationships,
}

impl SectionHeader {
    /// Every header in declaration order
    ///
    /// Declaration order has no effect on parsing; sections are ordered by
    /// where they occur in the text.
    pub const ALL: [SectionHeader; 14] = [
        SectionHeader::Name,
        SectionHeader::Race,
        SectionHeader::Jobs,
        SectionHeader::Role,
        SectionHeader::Parents,
        SectionHeader::Personality,
        SectionHeader::Bio,
        SectionHeader::Biography,
        SectionHeader::Equipment,
        SectionHeader::Style,
        SectionHeader::Stats,
        SectionHeader::Abilities,
        SectionHeader::Notes,
        SectionHeader::Relationships,
    ];

    /// The literal token, colon included
    pub fn token(&self) -> &'static str {
        match self {
            SectionHeader::Name => "NAME:",
            SectionHeader::Race => "RACE:",
            SectionHeader::Jobs => "JOBS:",
            SectionHeader::Role => "ROLE:",
            SectionHeader::Parents => "PARENTS:",
            SectionHeader::Personality => "PERSONALITY:",
            SectionHeader::Bio => "BIO:",
            SectionHeader::Biography => "BIOGRAPHY:",
            SectionHeader::Equipment => "EQUIPMENT:",
            SectionHeader::Style => "STYLE:",
            SectionHeader::Stats => "STATS:",
            SectionHeader::Abilities => "ABILITIES:",
            SectionHeader::Notes => "NOTES:",
            SectionHeader::Relationships => "RELATIONSHIPS:",
        }
    }
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One header and the span of text it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Which header opened the section
    pub header: SectionHeader,
    /// Byte offset of the header token
    pub offset: usize,
    /// Byte range of the untrimmed body
    pub body: Range<usize>,
}

impl Section {
    /// The trimmed body text
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.body.clone()).unwrap_or("").trim()
    }
}

/// Result of one extraction pass
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The merged record
    pub record: CharacterRecord,
    /// Sections found, in text order
    pub sections: Vec<Section>,
    /// Fields whose value differs from the input record
    pub changes: Vec<FieldChange>,
}

/// One exchange in a chat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// What the user sent
    pub message: String,
    /// What the generation service answered
    pub reply: String,
    /// How the reply was classified
    pub kind: OutputKind,
}

/// What happened to a submitted message
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The reply was conversation; the record is untouched
    Plain {
        /// Reply text
        reply: String,
    },
    /// The reply was a character sheet and was merged into the record
    Character {
        /// Reply text
        reply: String,
        /// The record after the merge
        record: CharacterRecord,
        /// Fields the merge changed
        changes: Vec<FieldChange>,
    },
    /// A new chat started while the request was in flight; the reply was dropped
    Superseded,
}
