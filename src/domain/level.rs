//! Leveled explanations: the 1-5 complexity model.
//!
//! Level 1 addresses a lay audience; level 5 is expert and research-frontier
//! material. An entry may populate any subset of the five levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// A term and its definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTerm {
    pub term: String,
    pub definition: String,
}

impl VocabularyTerm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Complexity tier, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ComplexityLevel(u8);

impl ComplexityLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const BASIC: Self = Self(1);
    pub const INTERMEDIATE: Self = Self(2);
    pub const ADVANCED: Self = Self(3);
    pub const CLINICAL: Self = Self(4);
    pub const EXPERT: Self = Self(5);

    /// Create a level, rejecting values outside 1..=5
    pub fn new(level: u8) -> Result<Self, ParseError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ParseError::LevelOutOfRange(i64::from(level)))
        }
    }

    /// All five levels in ascending order
    pub fn all() -> impl Iterator<Item = ComplexityLevel> {
        (Self::MIN..=Self::MAX).map(ComplexityLevel)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Short audience label for display
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "basic",
            2 => "intermediate",
            3 => "advanced",
            4 => "clinical",
            _ => "expert",
        }
    }
}

impl TryFrom<u8> for ComplexityLevel {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> Self {
        level.0
    }
}

impl FromStr for ComplexityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidLevel(s.to_string()))?;
        u8::try_from(value)
            .map_err(|_| ParseError::LevelOutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One explanatory layer of a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelContent {
    /// Tier this layer belongs to; must equal its key in the entry's level map
    pub level: ComplexityLevel,

    /// One-paragraph abstract
    pub summary: String,

    /// Long-form body; formatted text kept opaque
    pub explanation: String,

    /// Vocabulary introduced at this level, in definition order
    #[serde(default)]
    pub key_terms: Vec<VocabularyTerm>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analogies: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_counseling_points: Vec<String>,
}

impl LevelContent {
    pub fn new(
        level: ComplexityLevel,
        summary: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            level,
            summary: summary.into(),
            explanation: explanation.into(),
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            clinical_notes: None,
            patient_counseling_points: Vec::new(),
        }
    }

    pub fn with_term(mut self, term: impl Into<String>, definition: impl Into<String>) -> Self {
        self.key_terms.push(VocabularyTerm::new(term, definition));
        self
    }

    pub fn with_analogy(mut self, analogy: impl Into<String>) -> Self {
        self.analogies.push(analogy.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_clinical_notes(mut self, notes: impl Into<String>) -> Self {
        self.clinical_notes = Some(notes.into());
        self
    }

    pub fn with_counseling_point(mut self, point: impl Into<String>) -> Self {
        self.patient_counseling_points.push(point.into());
        self
    }

    /// Every human-readable string of this layer, in field order
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [self.summary.as_str(), self.explanation.as_str()]
            .into_iter()
            .chain(
                self.key_terms
                    .iter()
                    .flat_map(|t| [t.term.as_str(), t.definition.as_str()]),
            )
            .chain(self.analogies.iter().map(String::as_str))
            .chain(self.examples.iter().map(String::as_str))
            .chain(self.clinical_notes.as_deref())
            .chain(self.patient_counseling_points.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert!(ComplexityLevel::new(0).is_err());
        assert!(ComplexityLevel::new(6).is_err());
        assert_eq!(ComplexityLevel::new(3).unwrap().get(), 3);
        assert_eq!(ComplexityLevel::all().count(), 5);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("2".parse::<ComplexityLevel>().unwrap().get(), 2);
        assert_eq!(
            "-1".parse::<ComplexityLevel>(),
            Err(ParseError::LevelOutOfRange(-1))
        );
        assert_eq!(
            "9".parse::<ComplexityLevel>(),
            Err(ParseError::LevelOutOfRange(9))
        );
        assert!(matches!(
            "two".parse::<ComplexityLevel>(),
            Err(ParseError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_level_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<ComplexityLevel>("4").is_ok());
        assert!(serde_json::from_str::<ComplexityLevel>("7").is_err());
    }

    #[test]
    fn test_text_fields_cover_terms_and_notes() {
        let level = ComplexityLevel::new(1).unwrap();
        let content = LevelContent::new(level, "Short summary", "Longer body")
            .with_term("villi", "Finger-like projections of the small intestine")
            .with_analogy("Like a shag carpet")
            .with_clinical_notes("Screen first-degree relatives");

        let fields: Vec<&str> = content.text_fields().collect();
        assert_eq!(fields.len(), 6);
        assert!(fields.contains(&"villi"));
        assert!(fields.contains(&"Screen first-degree relatives"));
    }
}
