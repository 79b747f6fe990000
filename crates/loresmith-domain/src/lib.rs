//! Loresmith Domain Layer
//!
//! The data model shared by every other crate: the character sheet that the
//! extractor fills in, the leaf-field addressing used for diffs, the export
//! page arithmetic, and the trait interfaces for the outside world.
//!
//! ## Key Concepts
//!
//! - **CharacterRecord**: one character's sheet, all fields free text
//! - **FieldPath**: stable dotted address of a leaf field (`stats.hp`)
//! - **FieldChange**: one leaf that differs between two record versions
//! - **PdfPageLayout**: how a rendered sheet raster is tiled onto A4 pages
//!
//! ## Architecture
//!
//! - Pure data and arithmetic only, no I/O
//! - Only `uuid` and `serde` as external dependencies
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod character;
pub mod export;
pub mod field;
pub mod traits;

// Re-exports for convenience
pub use character::{Abilities, CharacterId, CharacterRecord, Equipment, Personality, Stats};
pub use export::{ExportError, ExportFormat, PageSlice, PdfPageLayout, RasterSettings, MAX_PAGES};
pub use field::{FieldChange, FieldPath};
