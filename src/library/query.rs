//! Query options and the free-text matching rule.
//!
//! A query matches an entry when the lower-cased query occurs as a substring
//! of any one of the entry's searchable strings. With [`MatchMode::AllWords`]
//! the query is split on whitespace and every word must occur somewhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, ClinicalRelevance, Entry, ParseError};

/// How a multi-word query is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The whole query is one literal substring
    #[default]
    Phrase,

    /// Every whitespace-separated word must occur in some field
    AllWords,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Phrase => write!(f, "phrase"),
            MatchMode::AllWords => write!(f, "all_words"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "phrase" => Ok(MatchMode::Phrase),
            "all_words" | "words" => Ok(MatchMode::AllWords),
            _ => Err(ParseError::UnknownMatchMode(s.to_string())),
        }
    }
}

/// Combined filter; every provided predicate must hold
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub category: Option<Category>,

    /// Free-text query; an empty string is treated as no query
    pub query: Option<String>,

    pub match_mode: MatchMode,

    /// Required body system tag (case-insensitive)
    pub system: Option<String>,

    /// Required topic tag (case-insensitive)
    pub topic: Option<String>,

    pub clinical_relevance: Option<ClinicalRelevance>,

    /// Only expose published entries
    pub published_only: bool,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn clinical_relevance(mut self, relevance: ClinicalRelevance) -> Self {
        self.clinical_relevance = Some(relevance);
        self
    }

    pub fn published_only(mut self, published_only: bool) -> Self {
        self.published_only = published_only;
        self
    }

    /// The query to apply, if any
    pub(crate) fn effective_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Check the non-text predicates against an entry
    pub(crate) fn accepts_facets(&self, entry: &Entry) -> bool {
        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }

        if let Some(system) = &self.system {
            if !entry.tags.has_system(system) {
                return false;
            }
        }

        if let Some(topic) = &self.topic {
            if !entry.tags.has_topic(topic) {
                return false;
            }
        }

        if let Some(relevance) = self.clinical_relevance {
            if entry.tags.clinical_relevance != Some(relevance) {
                return false;
            }
        }

        !self.published_only || entry.is_published()
    }
}

/// Lower-case every searchable string of an entry
pub(crate) fn lowercase_fields(entry: &Entry) -> Vec<String> {
    entry
        .searchable_strings()
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

/// Match a query against pre-lowercased fields
pub(crate) fn matches(fields: &[String], query: &str, mode: MatchMode) -> bool {
    let query_lower = query.to_lowercase();

    match mode {
        MatchMode::Phrase => fields.iter().any(|f| f.contains(&query_lower)),
        MatchMode::AllWords => query_lower
            .split_whitespace()
            .all(|word| fields.iter().any(|f| f.contains(word))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_lowercase()).collect()
    }

    #[test]
    fn test_phrase_match_is_case_insensitive() {
        let f = fields(&["Epinephrine 1 mg IV every 3-5 minutes"]);
        assert!(matches(&f, "EPINEPHRINE", MatchMode::Phrase));
        assert!(matches(&f, "1 mg iv", MatchMode::Phrase));
        assert!(!matches(&f, "amiodarone", MatchMode::Phrase));
    }

    #[test]
    fn test_phrase_does_not_span_fields() {
        let f = fields(&["septic", "shock"]);
        assert!(!matches(&f, "septic shock", MatchMode::Phrase));
        assert!(matches(&f, "septic shock", MatchMode::AllWords));
    }

    #[test]
    fn test_all_words_requires_every_word() {
        let f = fields(&["Lactate level", "Blood cultures before antibiotics"]);
        assert!(matches(&f, "lactate cultures", MatchMode::AllWords));
        assert!(!matches(&f, "lactate troponin", MatchMode::AllWords));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let f = fields(&["anything"]);
        assert!(matches(&f, "", MatchMode::Phrase));
        assert!(matches(&f, "   ", MatchMode::AllWords));
    }

    #[test]
    fn test_effective_query_ignores_empty_string() {
        assert_eq!(FilterOptions::new().query("").effective_query(), None);
        assert_eq!(
            FilterOptions::new().query("sepsis").effective_query(),
            Some("sepsis")
        );
    }

    #[test]
    fn test_match_mode_from_str() {
        assert_eq!("phrase".parse::<MatchMode>().unwrap(), MatchMode::Phrase);
        assert_eq!("all-words".parse::<MatchMode>().unwrap(), MatchMode::AllWords);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }
}
