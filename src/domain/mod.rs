//! Domain types for the content library.
//!
//! This module contains the content schema:
//! - Level: the 1-5 complexity model and vocabulary terms
//! - Category: closed classification per content family
//! - Entry: the top-level content record and its references

pub mod category;
pub mod entry;
pub mod error;
pub mod level;

// Re-export commonly used types
pub use category::{Category, ContentKind, CriticalCareCategory};
pub use entry::{
    Citation, ClinicalProfile, ClinicalRelevance, ContentStatus, ContentTags, CrossReference,
    Entry, EntryId, ExamRelevance, MediaReference,
};
pub use error::ParseError;
pub use level::{ComplexityLevel, LevelContent, VocabularyTerm};
