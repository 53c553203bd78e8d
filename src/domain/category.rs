//! Closed classification tags used to partition entries.
//!
//! Each content family has its own enumeration; [`Category`] joins them so the
//! catalog can hold entries from every family while queries stay exhaustive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Critical care topic families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CriticalCareCategory {
    Shock,
    RespiratoryFailure,
    CardiacArrest,
    Sepsis,
    NeurologicalEmergency,
    Toxicology,
    Monitoring,
    Procedures,
}

impl CriticalCareCategory {
    /// Every critical care category, in canonical order
    pub const ALL: [CriticalCareCategory; 8] = [
        CriticalCareCategory::Shock,
        CriticalCareCategory::RespiratoryFailure,
        CriticalCareCategory::CardiacArrest,
        CriticalCareCategory::Sepsis,
        CriticalCareCategory::NeurologicalEmergency,
        CriticalCareCategory::Toxicology,
        CriticalCareCategory::Monitoring,
        CriticalCareCategory::Procedures,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CriticalCareCategory::Shock => "shock",
            CriticalCareCategory::RespiratoryFailure => "respiratory-failure",
            CriticalCareCategory::CardiacArrest => "cardiac-arrest",
            CriticalCareCategory::Sepsis => "sepsis",
            CriticalCareCategory::NeurologicalEmergency => "neurological-emergency",
            CriticalCareCategory::Toxicology => "toxicology",
            CriticalCareCategory::Monitoring => "monitoring",
            CriticalCareCategory::Procedures => "procedures",
        }
    }
}

/// Kind of a leveled educational content entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        ContentKind::Structure,
        ContentKind::System,
        ContentKind::Pathway,
        ContentKind::Process,
        ContentKind::Condition,
        ContentKind::Concept,
        ContentKind::Topic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Structure => "structure",
            ContentKind::System => "system",
            ContentKind::Pathway => "pathway",
            ContentKind::Process => "process",
            ContentKind::Condition => "condition",
            ContentKind::Concept => "concept",
            ContentKind::Topic => "topic",
        }
    }
}

/// Category of a catalog entry
///
/// Serialized as its canonical kebab-case string (`"shock"`, `"condition"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    /// Critical care reference topic
    CriticalCare(CriticalCareCategory),

    /// Leveled educational content
    Content(ContentKind),
}

impl Category {
    /// Canonical string form
    pub fn as_str(self) -> &'static str {
        match self {
            Category::CriticalCare(c) => c.as_str(),
            Category::Content(k) => k.as_str(),
        }
    }

    /// Every category the library knows about
    pub fn all() -> impl Iterator<Item = Category> {
        CriticalCareCategory::ALL
            .into_iter()
            .map(Category::CriticalCare)
            .chain(ContentKind::ALL.into_iter().map(Category::Content))
    }
}

impl From<CriticalCareCategory> for Category {
    fn from(c: CriticalCareCategory) -> Self {
        Category::CriticalCare(c)
    }
}

impl From<ContentKind> for Category {
    fn from(k: ContentKind) -> Self {
        Category::Content(k)
    }
}

impl fmt::Display for CriticalCareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Category::all()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "shock".parse::<Category>().unwrap(),
            Category::CriticalCare(CriticalCareCategory::Shock)
        );
        assert_eq!(
            "Neurological Emergency".parse::<Category>().unwrap(),
            Category::CriticalCare(CriticalCareCategory::NeurologicalEmergency)
        );
        assert_eq!(
            "respiratory_failure".parse::<Category>().unwrap(),
            Category::CriticalCare(CriticalCareCategory::RespiratoryFailure)
        );
        assert_eq!(
            "CONDITION".parse::<Category>().unwrap(),
            Category::Content(ContentKind::Condition)
        );
        assert!(matches!(
            "trauma".parse::<Category>(),
            Err(ParseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_strings_are_unique() {
        let names: Vec<&str> = Category::all().map(Category::as_str).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_category_serializes_as_string() {
        let category = Category::CriticalCare(CriticalCareCategory::CardiacArrest);
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"cardiac-arrest\"");

        let parsed: Category = serde_json::from_str("\"topic\"").unwrap();
        assert_eq!(parsed, Category::Content(ContentKind::Topic));
        assert!(serde_json::from_str::<Category>("\"nope\"").is_err());
    }
}
