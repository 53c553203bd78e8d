//! In-memory catalog of all content entries.
//!
//! Built once from static definitions and read-only afterwards, so it can be
//! shared across threads by reference. Every query returns entries in
//! insertion order.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use super::audit::{self, AuditReport};
use super::query::{self, FilterOptions, MatchMode};
use crate::domain::{Category, ComplexityLevel, CrossReference, Entry, EntryId, LevelContent};

/// Process-wide built-in catalog (stores Result to report construction errors)
static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

/// Inconsistent static data detected while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate entry id: {id}")]
    DuplicateId { id: EntryId },

    #[error("Entry {id} stores level {level} under key {key}")]
    LevelMismatch {
        id: EntryId,
        key: ComplexityLevel,
        level: ComplexityLevel,
    },
}

/// Read-only collection of entries keyed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Entries in insertion order
    entries: Vec<Entry>,

    /// Entry id to position in `entries`
    index: HashMap<EntryId, usize>,

    /// Lower-cased searchable strings, parallel to `entries`
    search_text: Vec<Vec<String>>,
}

impl Catalog {
    /// Build a catalog, failing on duplicate ids or mismatched level keys
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            entries: Vec::new(),
            index: HashMap::new(),
            search_text: Vec::new(),
        };

        for entry in entries {
            if catalog.index.contains_key(&entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }

            if let Some((key, content)) = entry.levels.iter().find(|(key, c)| **key != c.level) {
                return Err(CatalogError::LevelMismatch {
                    id: entry.id.clone(),
                    key: *key,
                    level: content.level,
                });
            }

            catalog.index.insert(entry.id.clone(), catalog.entries.len());
            catalog.search_text.push(query::lowercase_fields(&entry));
            catalog.entries.push(entry);
        }

        debug!(
            entries = catalog.entries.len(),
            categories = catalog.categories().len(),
            "Built content catalog"
        );

        Ok(catalog)
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by id; a missing id is not an error
    pub fn get_by_id(&self, id: &str) -> Option<&Entry> {
        self.index
            .get(&EntryId::new(id))
            .map(|&position| &self.entries[position])
    }

    /// Entries whose category equals `category`
    pub fn get_by_category(&self, category: impl Into<Category>) -> Vec<&Entry> {
        let category = category.into();
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Search entries by query (case-insensitive substring match)
    ///
    /// An empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .zip(&self.search_text)
            .filter(|(_, fields)| query::matches(fields, query, MatchMode::Phrase))
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Apply category, text, tag and status predicates together
    pub fn filter(&self, options: &FilterOptions) -> Vec<&Entry> {
        let text = options.effective_query();

        self.entries
            .iter()
            .zip(&self.search_text)
            .filter(|(entry, fields)| {
                options.accepts_facets(entry)
                    && text.map_or(true, |q| query::matches(fields, q, options.match_mode))
            })
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Distinct categories present, in order of first appearance
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        categories
    }

    /// Get one level of an entry's explanation
    pub fn level(&self, id: &str, level: ComplexityLevel) -> Option<&LevelContent> {
        self.get_by_id(id)?.level(level)
    }

    /// Resolve an entry's cross references against this catalog
    ///
    /// Returns `None` when `id` itself is unknown.
    pub fn related(&self, id: &str) -> Option<Vec<ResolvedReference<'_>>> {
        let entry = self.get_by_id(id)?;
        Some(
            entry
                .cross_references
                .iter()
                .map(|reference| ResolvedReference {
                    reference,
                    target: self.get_by_id(reference.target_id.as_str()),
                })
                .collect(),
        )
    }

    /// Run the content checks over every entry
    pub fn audit(&self) -> AuditReport {
        audit::audit_catalog(self)
    }
}

/// A cross reference paired with its target, when the target exists
#[derive(Debug, Clone, Copy)]
pub struct ResolvedReference<'a> {
    pub reference: &'a CrossReference,
    pub target: Option<&'a Entry>,
}

impl ResolvedReference<'_> {
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// Get the built-in catalog (builds once, then cached)
pub fn builtin() -> Result<&'static Catalog, CatalogError> {
    let result = BUILTIN.get_or_init(|| Catalog::from_entries(crate::content::all_entries()));

    match result {
        Ok(catalog) => Ok(catalog),
        Err(e) => Err(e.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ContentKind, ContentStatus, ContentTags, CriticalCareCategory, LevelContent,
    };

    fn level(n: u8) -> ComplexityLevel {
        ComplexityLevel::new(n).unwrap()
    }

    fn small_catalog() -> Catalog {
        Catalog::from_entries([
            Entry::new("septic-shock", CriticalCareCategory::Shock, "Septic Shock")
                .with_description("Distributive shock from infection")
                .with_status(ContentStatus::Published),
            Entry::new("ards", CriticalCareCategory::RespiratoryFailure, "ARDS")
                .with_description("Non-cardiogenic pulmonary edema")
                .with_status(ContentStatus::Published),
            Entry::new("celiac-disease", ContentKind::Condition, "Celiac Disease")
                .with_level(LevelContent::new(level(1), "Gluten reaction", "Villi flatten"))
                .with_tags(ContentTags {
                    systems: vec!["Gastrointestinal".to_string()],
                    ..Default::default()
                }),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_by_id("ards").unwrap().name, "ARDS");
        assert!(catalog.get_by_id("missing").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::from_entries([
            Entry::new("dup", CriticalCareCategory::Shock, "First"),
            Entry::new("dup", CriticalCareCategory::Sepsis, "Second"),
        ]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateId {
                id: EntryId::new("dup")
            }
        );
    }

    #[test]
    fn test_catalog_rejects_level_mismatch() {
        let mut entry = Entry::new("bad", ContentKind::Concept, "Bad");
        entry
            .levels
            .insert(level(2), LevelContent::new(level(3), "summary", "body"));

        match Catalog::from_entries([entry]) {
            Err(CatalogError::LevelMismatch { id, key, level: found }) => {
                assert_eq!(id.as_str(), "bad");
                assert_eq!(key.get(), 2);
                assert_eq!(found.get(), 3);
            }
            other => panic!("Expected LevelMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_search() {
        let catalog = small_catalog();

        // Search by description
        let results = catalog.search("infection");
        assert_eq!(results.len(), 1);

        // Search by level text
        let results = catalog.search("villi");
        assert_eq!(results.len(), 1);

        // Case insensitive
        assert_eq!(catalog.search("ARDS").len(), 1);
        assert_eq!(catalog.search("ards").len(), 1);

        // Category string is searchable
        assert_eq!(catalog.search("respiratory-failure").len(), 1);

        // No match
        assert!(catalog.search("python").is_empty());

        // Empty query matches everything
        assert_eq!(catalog.search("").len(), 3);
    }

    #[test]
    fn test_catalog_filter_combines_predicates() {
        let catalog = small_catalog();

        let shock = catalog.filter(&FilterOptions::new().category(CriticalCareCategory::Shock));
        assert_eq!(shock.len(), 1);

        let none = catalog.filter(
            &FilterOptions::new()
                .category(CriticalCareCategory::Shock)
                .query("pulmonary"),
        );
        assert!(none.is_empty());

        let gi = catalog.filter(&FilterOptions::new().system("gastrointestinal"));
        assert_eq!(gi.len(), 1);
        assert_eq!(gi[0].id.as_str(), "celiac-disease");

        let published = catalog.filter(&FilterOptions::new().published_only(true));
        assert_eq!(published.len(), 2);

        assert_eq!(catalog.filter(&FilterOptions::new()).len(), 3);
    }

    #[test]
    fn test_catalog_categories_in_first_appearance_order() {
        let catalog = small_catalog();
        assert_eq!(
            catalog.categories(),
            vec![
                Category::CriticalCare(CriticalCareCategory::Shock),
                Category::CriticalCare(CriticalCareCategory::RespiratoryFailure),
                Category::Content(ContentKind::Condition),
            ]
        );
    }

    #[test]
    fn test_catalog_related_resolves_known_targets() {
        let catalog = Catalog::from_entries([
            Entry::new("a", ContentKind::Topic, "A")
                .with_cross_reference(CrossReference::new("b", "topic", "related", "B"))
                .with_cross_reference(CrossReference::new("gone", "topic", "see-also", "Gone")),
            Entry::new("b", ContentKind::Topic, "B"),
        ])
        .unwrap();

        let related = catalog.related("a").unwrap();
        assert_eq!(related.len(), 2);
        assert!(related[0].is_resolved());
        assert_eq!(related[0].target.unwrap().name, "B");
        assert!(!related[1].is_resolved());

        assert!(catalog.related("missing").is_none());
    }

    #[test]
    fn test_catalog_level_lookup() {
        let catalog = small_catalog();
        assert_eq!(
            catalog.level("celiac-disease", level(1)).unwrap().summary,
            "Gluten reaction"
        );
        assert!(catalog.level("celiac-disease", level(4)).is_none());
        assert!(catalog.level("missing", level(1)).is_none());
    }
}
