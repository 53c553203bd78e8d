//! Content quality checks over a catalog.
//!
//! Structural invariants that would corrupt query results (duplicate ids,
//! mismatched level keys) are rejected when the catalog is built. The checks
//! here cover authoring quality: missing text, placeholder text, dangling
//! references. Dangling cross references are legal and only reported as
//! warnings.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::catalog::Catalog;
use crate::domain::{ComplexityLevel, Entry, EntryId};

/// Relationship names recognized for cross references
pub const KNOWN_RELATIONSHIPS: [&str; 5] = ["parent", "child", "sibling", "related", "see-also"];

const PLACEHOLDER_MARKERS: [&str; 3] = ["todo", "fixme", "placeholder"];

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Group a check belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Structure,
    LevelContent,
    ContentQuality,
    CrossReferences,
    Metadata,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Structure => write!(f, "structure"),
            CheckKind::LevelContent => write!(f, "level-content"),
            CheckKind::ContentQuality => write!(f, "content-quality"),
            CheckKind::CrossReferences => write!(f, "cross-references"),
            CheckKind::Metadata => write!(f, "metadata"),
        }
    }
}

/// A single finding against one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditIssue {
    pub entry_id: EntryId,
    pub severity: Severity,
    pub check: CheckKind,
    pub message: String,
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.entry_id, self.check, self.message
        )
    }
}

/// All findings for a catalog
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    /// Number of entries checked
    pub entries_checked: usize,

    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn errors(&self) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True when no errors were found (warnings are allowed)
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Issues recorded against one entry
    pub fn for_entry<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a AuditIssue> {
        self.issues.iter().filter(move |i| i.entry_id.as_str() == id)
    }
}

/// Collects issues for one entry
struct Findings<'a> {
    entry: &'a Entry,
    issues: Vec<AuditIssue>,
}

impl<'a> Findings<'a> {
    fn new(entry: &'a Entry) -> Self {
        Self {
            entry,
            issues: Vec::new(),
        }
    }

    fn push(&mut self, severity: Severity, check: CheckKind, message: impl Into<String>) {
        self.issues.push(AuditIssue {
            entry_id: self.entry.id.clone(),
            severity,
            check,
            message: message.into(),
        });
    }

    fn error(&mut self, check: CheckKind, message: impl Into<String>) {
        self.push(Severity::Error, check, message);
    }

    fn warning(&mut self, check: CheckKind, message: impl Into<String>) {
        self.push(Severity::Warning, check, message);
    }
}

/// Check whether text contains a placeholder marker
pub fn contains_placeholder(text: &str) -> bool {
    let lower = text.to_lowercase();
    PLACEHOLDER_MARKERS.iter().any(|marker| {
        lower.match_indices(marker).any(|(start, m)| {
            let before = lower[..start].chars().next_back();
            let after = lower[start + m.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    })
}

/// Run every entry-local check
///
/// Cross references are only checked for shape here; resolution against the
/// rest of the library happens in [`audit_catalog`].
pub fn audit_entry(entry: &Entry) -> Vec<AuditIssue> {
    let mut findings = Findings::new(entry);

    check_structure(&mut findings);
    check_levels(&mut findings);
    check_quality(&mut findings);
    check_reference_shape(&mut findings);
    check_metadata(&mut findings);

    findings.issues
}

/// Audit every entry and resolve cross references against the catalog
pub fn audit_catalog(catalog: &Catalog) -> AuditReport {
    let mut report = AuditReport {
        entries_checked: catalog.len(),
        issues: Vec::new(),
    };

    for entry in catalog.iter() {
        report.issues.extend(audit_entry(entry));

        let mut findings = Findings::new(entry);
        for reference in &entry.cross_references {
            let target = reference.target_id.as_str();
            if !target.trim().is_empty() && catalog.get_by_id(target).is_none() {
                findings.warning(
                    CheckKind::CrossReferences,
                    format!("Cross-reference target not in library: {}", target),
                );
            }
        }
        report.issues.extend(findings.issues);
    }

    if !report.is_clean() {
        warn!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            "Content audit found errors"
        );
    }

    report
}

fn check_structure(findings: &mut Findings<'_>) {
    let entry = findings.entry;

    if entry.id.as_str().trim().is_empty() {
        findings.error(CheckKind::Structure, "Empty entry id");
    }

    if entry.name.trim().is_empty() {
        findings.error(CheckKind::Structure, "Empty name");
    }

    if entry.levels.is_empty() && entry.clinical.is_none() {
        findings.error(
            CheckKind::Structure,
            "Entry has neither leveled content nor a clinical profile",
        );
    }

    if let Some(clinical) = &entry.clinical {
        if clinical.pathophysiology.trim().is_empty() {
            findings.error(CheckKind::Structure, "Empty pathophysiology");
        }
        if clinical.patient_explanation.trim().is_empty() {
            findings.warning(CheckKind::Structure, "Empty patient explanation");
        }
    }
}

fn check_levels(findings: &mut Findings<'_>) {
    let entry = findings.entry;
    if entry.levels.is_empty() {
        return;
    }

    for level in ComplexityLevel::all() {
        if !entry.levels.contains_key(&level) {
            findings.warning(
                CheckKind::LevelContent,
                format!("Missing complexity level {}", level),
            );
        }
    }

    for (level, content) in &entry.levels {
        if content.summary.trim().is_empty() {
            findings.error(
                CheckKind::LevelContent,
                format!("Level {}: Missing or empty summary", level),
            );
        }

        if content.explanation.trim().is_empty() {
            findings.error(
                CheckKind::LevelContent,
                format!("Level {}: Missing or empty explanation", level),
            );
        }

        if content.key_terms.is_empty() {
            findings.warning(
                CheckKind::LevelContent,
                format!("Level {}: No key terms", level),
            );
        }

        for (i, term) in content.key_terms.iter().enumerate() {
            if term.term.trim().is_empty() {
                findings.error(
                    CheckKind::LevelContent,
                    format!("Level {}: Key term {} has empty term", level, i + 1),
                );
            }
            if term.definition.trim().is_empty() {
                findings.error(
                    CheckKind::LevelContent,
                    format!("Level {}: Key term \"{}\" has empty definition", level, term.term),
                );
            }
        }
    }
}

fn check_quality(findings: &mut Findings<'_>) {
    let entry = findings.entry;

    if contains_placeholder(&entry.name) {
        findings.error(
            CheckKind::ContentQuality,
            format!("Name contains placeholder text: {}", entry.name),
        );
    }

    match &entry.localized_name {
        None => findings.warning(CheckKind::ContentQuality, "Missing Spanish name"),
        Some(name) if name.trim().is_empty() => {
            findings.warning(CheckKind::ContentQuality, "Missing Spanish name")
        }
        Some(name) if contains_placeholder(name) => findings.error(
            CheckKind::ContentQuality,
            format!("Spanish name contains placeholder text: {}", name),
        ),
        Some(_) => {}
    }

    for (level, content) in &entry.levels {
        let prose = [
            ("summary", Some(content.summary.as_str())),
            ("explanation", Some(content.explanation.as_str())),
            ("clinical notes", content.clinical_notes.as_deref()),
        ];
        for (field, value) in prose {
            if value.is_some_and(contains_placeholder) {
                findings.error(
                    CheckKind::ContentQuality,
                    format!("Level {}: {} contains placeholder text", level, field),
                );
            }
        }

        for term in &content.key_terms {
            if contains_placeholder(&term.term) || contains_placeholder(&term.definition) {
                findings.error(
                    CheckKind::ContentQuality,
                    format!("Level {}: Key term \"{}\" contains placeholder text", level, term.term),
                );
            }
        }
    }
}

fn check_reference_shape(findings: &mut Findings<'_>) {
    let entry = findings.entry;

    for (i, reference) in entry.cross_references.iter().enumerate() {
        if reference.target_id.as_str().trim().is_empty() {
            findings.error(
                CheckKind::CrossReferences,
                format!("Cross-reference {}: Missing target id", i + 1),
            );
            continue;
        }

        if !KNOWN_RELATIONSHIPS.contains(&reference.relationship.as_str()) {
            findings.warning(
                CheckKind::CrossReferences,
                format!(
                    "Cross-reference {}: Unknown relationship \"{}\"",
                    i + 1,
                    reference.relationship
                ),
            );
        }

        if reference.target_id == entry.id {
            findings.warning(
                CheckKind::CrossReferences,
                format!("Cross-reference {}: Entry references itself", i + 1),
            );
        }
    }
}

fn check_metadata(findings: &mut Findings<'_>) {
    let entry = findings.entry;

    if entry.version == 0 {
        findings.error(CheckKind::Metadata, "Version must start at 1");
    }

    if entry.updated_at < entry.created_at {
        findings.error(CheckKind::Metadata, "Updated timestamp precedes creation");
    }

    for citation in &entry.citations {
        if citation.title.trim().is_empty() {
            findings.error(
                CheckKind::Metadata,
                format!("Citation {} has empty title", citation.id),
            );
        }
    }

    if let Some(exam) = &entry.tags.exam_relevance {
        for (i, shelf) in exam.shelf.iter().enumerate() {
            if shelf.trim().is_empty() {
                findings.error(
                    CheckKind::Metadata,
                    format!("Exam relevance: shelf entry {} is blank", i + 1),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::domain::{
        Citation, ClinicalProfile, ContentKind, ContentTags, CriticalCareCategory, CrossReference,
        ExamRelevance, LevelContent,
    };

    fn level(n: u8) -> ComplexityLevel {
        ComplexityLevel::new(n).unwrap()
    }

    fn clinical_entry(id: &str) -> Entry {
        Entry::new(id, CriticalCareCategory::Sepsis, "Sepsis")
            .with_localized_name("Sepsis")
            .with_clinical(ClinicalProfile {
                pathophysiology: "Dysregulated host response".to_string(),
                patient_explanation: "Your body overreacts to an infection.".to_string(),
                ..Default::default()
            })
    }

    #[test]
    fn test_contains_placeholder() {
        assert!(contains_placeholder("TODO: write this"));
        assert!(contains_placeholder("Placeholder text"));
        assert!(contains_placeholder("see fixme"));
        assert!(!contains_placeholder("Todos los pacientes"));
        assert!(!contains_placeholder("Normal clinical prose"));
    }

    #[test]
    fn test_clean_clinical_entry_has_no_issues() {
        assert!(audit_entry(&clinical_entry("sepsis")).is_empty());
    }

    #[test]
    fn test_empty_entry_is_an_error() {
        let entry = Entry::new("empty", ContentKind::Topic, "Empty").with_localized_name("Vacío");
        let issues = audit_entry(&entry);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].check, CheckKind::Structure);
    }

    #[test]
    fn test_sparse_levels_warn_and_empty_text_errors() {
        let entry = Entry::new("sparse", ContentKind::Concept, "Sparse")
            .with_localized_name("Escaso")
            .with_level(LevelContent::new(level(1), "", "Body").with_term("a", "b"));

        let issues = audit_entry(&entry);
        let missing_levels = issues
            .iter()
            .filter(|i| i.message.starts_with("Missing complexity level"))
            .count();
        assert_eq!(missing_levels, 4);
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.message.contains("empty summary")));
    }

    #[test]
    fn test_placeholder_in_level_is_an_error() {
        let entry = Entry::new("draft", ContentKind::Concept, "Draft")
            .with_localized_name("Borrador")
            .with_level(
                LevelContent::new(level(1), "Summary", "TODO fill in")
                    .with_term("term", "definition"),
            );

        let issues = audit_entry(&entry);
        assert!(issues
            .iter()
            .any(|i| i.check == CheckKind::ContentQuality && i.message.contains("explanation")));
    }

    #[test]
    fn test_catalog_audit_warns_on_dangling_reference() {
        let catalog = Catalog::from_entries([clinical_entry("sepsis")
            .with_cross_reference(CrossReference::new("septic-shock", "condition", "related", "Septic shock"))
            .with_cross_reference(CrossReference::new("", "condition", "related", "Nothing"))])
        .unwrap();

        let report = catalog.audit();
        assert_eq!(report.entries_checked, 1);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.for_entry("sepsis").count(), 2);
    }

    #[test]
    fn test_unknown_relationship_is_a_warning() {
        let entry = clinical_entry("sepsis").with_cross_reference(CrossReference::new(
            "other",
            "topic",
            "invalid-relationship",
            "Other",
        ));
        let issues = audit_entry(&entry);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_self_reference_is_a_warning() {
        let entry = clinical_entry("sepsis").with_cross_reference(CrossReference::new(
            "sepsis", "condition", "related", "Sepsis",
        ));

        let issues = audit_entry(&entry);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].check, CheckKind::CrossReferences);
        assert!(issues[0].message.contains("references itself"));
    }

    #[test]
    fn test_version_and_timestamp_errors() {
        let now = Utc::now();
        let entry = clinical_entry("sepsis")
            .with_version(0)
            .authored(now, now - Duration::days(1));

        let issues = audit_entry(&entry);
        let messages: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error && i.check == CheckKind::Metadata)
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Version must start at 1", "Updated timestamp precedes creation"]
        );
    }

    #[test]
    fn test_empty_citation_title_is_an_error() {
        let entry = clinical_entry("sepsis").with_citation(Citation {
            id: "ssc-2021".to_string(),
            kind: "guideline".to_string(),
            title: "  ".to_string(),
            authors: Vec::new(),
            source: "Critical Care Medicine".to_string(),
            url: None,
            chapter: None,
        });

        let issues = audit_entry(&entry);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "Citation ssc-2021 has empty title");
    }

    #[test]
    fn test_blank_shelf_exam_is_an_error() {
        let entry = clinical_entry("sepsis").with_tags(ContentTags {
            exam_relevance: Some(ExamRelevance {
                usmle: true,
                nbme: false,
                shelf: vec!["medicine".to_string(), " ".to_string()],
            }),
            ..Default::default()
        });

        let issues = audit_entry(&entry);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].check, CheckKind::Metadata);
        assert_eq!(issues[0].message, "Exam relevance: shelf entry 2 is blank");
    }
}
