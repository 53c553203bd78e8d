//! The top-level content unit and its reference metadata.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::error::ParseError;
use super::level::{ComplexityLevel, LevelContent};

/// Stable, globally unique entry identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Publication lifecycle of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Review,
    Published,
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::Review => write!(f, "review"),
            ContentStatus::Published => write!(f, "published"),
        }
    }
}

impl FromStr for ContentStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(ContentStatus::Draft),
            "review" => Ok(ContentStatus::Review),
            "published" => Ok(ContentStatus::Published),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

/// How often the topic matters in clinical practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalRelevance {
    Low,
    Medium,
    High,
    Critical,
    Common,
    Essential,
    Specialized,
}

impl fmt::Display for ClinicalRelevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClinicalRelevance::Low => "low",
            ClinicalRelevance::Medium => "medium",
            ClinicalRelevance::High => "high",
            ClinicalRelevance::Critical => "critical",
            ClinicalRelevance::Common => "common",
            ClinicalRelevance::Essential => "essential",
            ClinicalRelevance::Specialized => "specialized",
        };
        f.write_str(s)
    }
}

impl FromStr for ClinicalRelevance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ClinicalRelevance::Low),
            "medium" => Ok(ClinicalRelevance::Medium),
            "high" => Ok(ClinicalRelevance::High),
            "critical" => Ok(ClinicalRelevance::Critical),
            "common" => Ok(ClinicalRelevance::Common),
            "essential" => Ok(ClinicalRelevance::Essential),
            "specialized" => Ok(ClinicalRelevance::Specialized),
            _ => Err(ParseError::UnknownRelevance(s.to_string())),
        }
    }
}

/// Board exam relevance flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRelevance {
    #[serde(default)]
    pub usmle: bool,

    #[serde(default)]
    pub nbme: bool,

    /// Shelf exams this topic appears on
    #[serde(default)]
    pub shelf: Vec<String>,
}

/// Faceted metadata used for filtering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTags {
    /// Body systems (e.g. "nervous", "renal")
    #[serde(default)]
    pub systems: Vec<String>,

    #[serde(default)]
    pub topics: Vec<String>,

    /// Free-text keywords; these participate in search
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_relevance: Option<ClinicalRelevance>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<ExamRelevance>,
}

impl ContentTags {
    pub fn has_system(&self, system: &str) -> bool {
        self.systems.iter().any(|s| s.eq_ignore_ascii_case(system))
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }
}

/// Pointer to an illustration or other media asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    pub id: String,

    /// Asset kind (diagram, image, video, ...)
    pub kind: String,

    pub filename: String,
    pub title: String,

    #[serde(default)]
    pub description: String,
}

/// Bibliographic source backing an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,

    /// Source kind (textbook, journal, guideline, website, ...)
    pub kind: String,

    pub title: String,

    #[serde(default)]
    pub authors: Vec<String>,

    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
}

/// Weak, non-owning link to another entry by id
///
/// The target may not exist in the catalog; such a reference is simply
/// unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    pub target_id: EntryId,

    /// Kind of the target as recorded by the author (condition, topic, ...)
    pub target_kind: String,

    /// Relationship to the target (parent, child, sibling, related, see-also)
    pub relationship: String,

    pub label: String,
}

impl CrossReference {
    pub fn new(
        target_id: impl Into<String>,
        target_kind: impl Into<String>,
        relationship: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            target_id: EntryId::new(target_id),
            target_kind: target_kind.into(),
            relationship: relationship.into(),
            label: label.into(),
        }
    }
}

/// Clinical reference sections of an acute-care entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalProfile {
    pub pathophysiology: String,

    #[serde(default)]
    pub clinical_features: Vec<String>,

    #[serde(default)]
    pub diagnostics: Vec<String>,

    #[serde(default)]
    pub treatment: Vec<String>,

    #[serde(default)]
    pub complications: Vec<String>,

    /// Plain-language explanation for patients and families
    pub patient_explanation: String,

    /// Warning signs that call for emergency care
    #[serde(default)]
    pub emergency_signs: Vec<String>,
}

impl ClinicalProfile {
    /// Every human-readable string of the profile, in field order
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.pathophysiology.as_str(),
            self.patient_explanation.as_str(),
        ]
        .into_iter()
        .chain(self.clinical_features.iter().map(String::as_str))
        .chain(self.diagnostics.iter().map(String::as_str))
        .chain(self.treatment.iter().map(String::as_str))
        .chain(self.complications.iter().map(String::as_str))
        .chain(self.emergency_signs.iter().map(String::as_str))
    }
}

/// One unit of educational content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Primary key; never reused or changed
    pub id: EntryId,

    pub category: Category,

    /// Display name
    pub name: String,

    /// Spanish display name, when translated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,

    /// Synonyms used for matching
    #[serde(default)]
    pub alternate_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sparse map of complexity level to explanation
    #[serde(default)]
    pub levels: BTreeMap<ComplexityLevel, LevelContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical: Option<ClinicalProfile>,

    #[serde(default)]
    pub media: Vec<MediaReference>,

    #[serde(default)]
    pub citations: Vec<Citation>,

    #[serde(default)]
    pub cross_references: Vec<CrossReference>,

    #[serde(default)]
    pub tags: ContentTags,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Incremented on every content edit
    pub version: u32,

    pub status: ContentStatus,
}

impl Entry {
    /// Create a new draft entry with no content
    pub fn new(id: impl Into<String>, category: impl Into<Category>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(id),
            category: category.into(),
            name: name.into(),
            localized_name: None,
            alternate_names: Vec::new(),
            description: None,
            levels: BTreeMap::new(),
            clinical: None,
            media: Vec::new(),
            citations: Vec::new(),
            cross_references: Vec::new(),
            tags: ContentTags::default(),
            created_at: now,
            updated_at: now,
            version: 1,
            status: ContentStatus::Draft,
        }
    }

    pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
        self.localized_name = Some(name.into());
        self
    }

    pub fn with_alternate_names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.alternate_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a level, keyed by the level's own tier
    pub fn with_level(mut self, content: LevelContent) -> Self {
        self.levels.insert(content.level, content);
        self
    }

    pub fn with_clinical(mut self, profile: ClinicalProfile) -> Self {
        self.clinical = Some(profile);
        self
    }

    pub fn with_media(mut self, media: MediaReference) -> Self {
        self.media.push(media);
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citations.push(citation);
        self
    }

    pub fn with_cross_reference(mut self, reference: CrossReference) -> Self {
        self.cross_references.push(reference);
        self
    }

    pub fn with_tags(mut self, tags: ContentTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set authoring timestamps
    pub fn authored(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Get one level of the explanation
    pub fn level(&self, level: ComplexityLevel) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }

    /// All strings that participate in free-text search
    ///
    /// Identity fields come first, then the clinical profile, then each
    /// level in ascending order, then tag keywords.
    pub fn searchable_strings(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        fields.extend(self.localized_name.as_deref());
        fields.extend(self.alternate_names.iter().map(String::as_str));
        fields.push(self.category.as_str());
        fields.extend(self.description.as_deref());

        if let Some(clinical) = &self.clinical {
            fields.extend(clinical.text_fields());
        }

        for content in self.levels.values() {
            fields.extend(content.text_fields());
        }

        fields.extend(self.tags.keywords.iter().map(String::as_str));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{ContentKind, CriticalCareCategory};

    fn sample_entry() -> Entry {
        Entry::new("celiac-disease", ContentKind::Condition, "Celiac Disease")
            .with_localized_name("Enfermedad celíaca")
            .with_alternate_names(["Gluten-sensitive enteropathy"])
            .with_level(LevelContent::new(
                ComplexityLevel::new(1).unwrap(),
                "Gluten damages the small intestine.",
                "The immune system reacts to gluten.",
            ))
    }

    #[test]
    fn test_entry_defaults() {
        let entry = Entry::new("x", CriticalCareCategory::Sepsis, "X");
        assert_eq!(entry.version, 1);
        assert_eq!(entry.status, ContentStatus::Draft);
        assert!(!entry.is_published());
        assert!(entry.levels.is_empty());
        assert!(entry.clinical.is_none());
    }

    #[test]
    fn test_with_level_keys_by_tier() {
        let entry = sample_entry();
        let level = ComplexityLevel::new(1).unwrap();
        assert_eq!(entry.level(level).unwrap().level, level);
        assert!(entry.level(ComplexityLevel::new(2).unwrap()).is_none());
    }

    #[test]
    fn test_searchable_strings_include_names_and_levels() {
        let entry = sample_entry();
        let fields = entry.searchable_strings();

        assert!(fields.contains(&"celiac-disease"));
        assert!(fields.contains(&"Enfermedad celíaca"));
        assert!(fields.contains(&"Gluten-sensitive enteropathy"));
        assert!(fields.contains(&"condition"));
        assert!(fields.contains(&"The immune system reacts to gluten."));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Published".parse::<ContentStatus>().unwrap(), ContentStatus::Published);
        assert!("archived".parse::<ContentStatus>().is_err());
    }

    #[test]
    fn test_entry_json_roundtrip_preserves_levels() {
        let entry = sample_entry().with_status(ContentStatus::Published);
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
