//! Catalog Query Integration Tests
//!
//! Lookup, category, search and filter behavior over the built-in library.

use std::collections::HashSet;

use soma_content::content::all_entries;
use soma_content::domain::{Category, ClinicalRelevance, ContentKind, CriticalCareCategory, Entry};
use soma_content::library::{builtin, Catalog, FilterOptions, MatchMode};

fn ids<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a str> {
    entries.into_iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_get_by_id_round_trips_every_entry() {
    let entries = all_entries();
    let catalog = Catalog::from_entries(entries.clone()).unwrap();

    assert_eq!(catalog.len(), entries.len());
    for entry in &entries {
        assert_eq!(catalog.get_by_id(entry.id.as_str()), Some(entry));
        // Repeated lookups agree
        assert_eq!(
            catalog.get_by_id(entry.id.as_str()),
            catalog.get_by_id(entry.id.as_str())
        );
    }
}

#[test]
fn test_get_by_id_unknown_is_none() {
    let catalog = builtin().unwrap();
    assert!(catalog.get_by_id("nonexistent-id").is_none());
    assert!(catalog.get_by_id("").is_none());
}

#[test]
fn test_shock_category_contents() {
    let catalog = builtin().unwrap();
    let shock = catalog.get_by_category(CriticalCareCategory::Shock);

    assert_eq!(
        ids(shock),
        vec![
            "hypovolemic-shock",
            "cardiogenic-shock",
            "septic-shock",
            "anaphylactic-shock",
            "neurogenic-shock",
        ]
    );
}

#[test]
fn test_categories_partition_the_catalog() {
    let catalog = builtin().unwrap();
    let categories = catalog.categories();

    let mut total = 0;
    for category in &categories {
        let members = catalog.get_by_category(*category);
        assert!(!members.is_empty());
        assert!(members.iter().all(|e| e.category == *category));
        total += members.len();
    }
    assert_eq!(total, catalog.len());

    // A category with no entries yields an empty list
    assert!(catalog.get_by_category(ContentKind::Structure).is_empty());
}

#[test]
fn test_critical_care_categories_each_once_in_order() {
    let catalog = builtin().unwrap();
    let categories = catalog.categories();

    let critical: Vec<Category> = categories
        .iter()
        .copied()
        .filter(|c| matches!(c, Category::CriticalCare(_)))
        .collect();
    let expected: Vec<Category> = CriticalCareCategory::ALL.into_iter().map(Category::from).collect();
    assert_eq!(critical, expected);

    let unique: HashSet<Category> = categories.iter().copied().collect();
    assert_eq!(unique.len(), categories.len());
}

#[test]
fn test_search_epinephrine() {
    let catalog = builtin().unwrap();
    let results = ids(catalog.search("epinephrine"));

    for expected in [
        "anaphylactic-shock",
        "ventricular-fibrillation-cardiac-arrest",
        "pea-asystole",
    ] {
        assert!(results.contains(&expected), "missing {}", expected);
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = builtin().unwrap();

    let upper = ids(catalog.search("CELIAC"));
    let lower = ids(catalog.search("celiac"));
    assert_eq!(upper, lower);
    assert!(upper.contains(&"celiac-disease"));
}

#[test]
fn test_search_results_contain_query() {
    let catalog = builtin().unwrap();

    for query in ["lactate", "naloxone", "Dietitian", "villous"] {
        let needle = query.to_lowercase();
        let results = catalog.search(query);
        assert!(!results.is_empty(), "no results for {}", query);

        for entry in &results {
            assert!(
                entry
                    .searchable_strings()
                    .iter()
                    .any(|s| s.to_lowercase().contains(&needle)),
                "{} returned for {} without a matching field",
                entry.id,
                query
            );
        }

        // Entries not returned contain no matching field
        for entry in catalog.iter() {
            if !results.contains(&entry) {
                assert!(!entry
                    .searchable_strings()
                    .iter()
                    .any(|s| s.to_lowercase().contains(&needle)));
            }
        }
    }
}

#[test]
fn test_search_matches_localized_name_and_keywords() {
    let catalog = builtin().unwrap();

    assert!(ids(catalog.search("enfermedad celíaca")).contains(&"celiac-disease"));
    assert!(ids(catalog.search("K90.0")).contains(&"celiac-disease"));
}

#[test]
fn test_search_empty_query_returns_everything() {
    let catalog = builtin().unwrap();
    assert_eq!(catalog.search("").len(), catalog.len());
    assert!(catalog.search("zzzz-no-such-term").is_empty());
}

#[test]
fn test_filter_is_monotonic() {
    let catalog = builtin().unwrap();

    let all = catalog.filter(&FilterOptions::new());
    let shock = catalog.filter(&FilterOptions::new().category(CriticalCareCategory::Shock));
    let shock_epi = catalog.filter(
        &FilterOptions::new()
            .category(CriticalCareCategory::Shock)
            .query("epinephrine"),
    );

    assert_eq!(all.len(), catalog.len());
    assert!(shock.iter().all(|e| all.contains(e)));
    assert!(shock_epi.iter().all(|e| shock.contains(e)));
    assert!(ids(shock_epi).contains(&"anaphylactic-shock"));
}

#[test]
fn test_filter_empty_query_means_no_query() {
    let catalog = builtin().unwrap();

    let with_empty = catalog.filter(
        &FilterOptions::new()
            .category(CriticalCareCategory::Sepsis)
            .query(""),
    );
    let without = catalog.filter(&FilterOptions::new().category(CriticalCareCategory::Sepsis));
    assert_eq!(ids(with_empty), ids(without));
}

#[test]
fn test_filter_by_tags() {
    let catalog = builtin().unwrap();

    let renal = ids(catalog.filter(&FilterOptions::new().system("Renal")));
    assert!(renal.contains(&"nutrition-medical-therapy"));

    let nutrition = ids(catalog.filter(&FilterOptions::new().topic("nutrition")));
    assert!(nutrition.contains(&"nutrition-medical-therapy"));
    assert!(nutrition.contains(&"celiac-disease"));
    assert!(!nutrition.contains(&"septic-shock"));
}

#[test]
fn test_filter_by_clinical_relevance() {
    let catalog = builtin().unwrap();

    let critical = catalog.filter(&FilterOptions::new().clinical_relevance(ClinicalRelevance::Critical));
    let critical_care = critical
        .iter()
        .filter(|e| matches!(e.category, Category::CriticalCare(_)))
        .count();
    assert_eq!(critical_care, 32);
    assert_eq!(critical.len(), 34);

    let critical_ids = ids(critical);
    assert!(critical_ids.contains(&"nutrition-medical-therapy"));
    assert!(critical_ids.contains(&"mental-health-tdah-adhd"));
    assert!(!critical_ids.contains(&"celiac-disease"));

    let common = ids(catalog.filter(&FilterOptions::new().clinical_relevance(ClinicalRelevance::Common)));
    assert_eq!(common, vec!["celiac-disease"]);

    // No entry carries this relevance
    assert!(catalog
        .filter(&FilterOptions::new().clinical_relevance(ClinicalRelevance::Specialized))
        .is_empty());

    // Relevance combines with the other predicates
    let critical_shock = catalog.filter(
        &FilterOptions::new()
            .category(CriticalCareCategory::Shock)
            .clinical_relevance(ClinicalRelevance::Critical),
    );
    assert_eq!(critical_shock.len(), 5);
}

#[test]
fn test_clinical_relevance_from_str() {
    assert_eq!(
        "Critical".parse::<ClinicalRelevance>().unwrap(),
        ClinicalRelevance::Critical
    );
    assert!("urgent".parse::<ClinicalRelevance>().is_err());
}

#[test]
fn test_filter_all_words_mode() {
    let catalog = builtin().unwrap();

    // The words occur in different fields, so the phrase does not match
    let phrase = catalog.filter(&FilterOptions::new().query("gluten dietitian"));
    assert!(phrase.is_empty());

    let words = ids(catalog.filter(
        &FilterOptions::new()
            .query("gluten dietitian")
            .match_mode(MatchMode::AllWords),
    ));
    assert!(words.contains(&"nutrition-medical-therapy"));
}

#[test]
fn test_related_and_levels() {
    let catalog = builtin().unwrap();

    let related = catalog.related("celiac-disease").unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(
        related[0].target.map(|e| e.id.as_str()),
        Some("nutrition-medical-therapy")
    );

    let adhd = catalog.related("mental-health-tdah-adhd").unwrap();
    assert!(adhd.iter().all(|r| !r.is_resolved()));

    let mnt = catalog.get_by_id("nutrition-medical-therapy").unwrap();
    assert_eq!(mnt.levels.len(), 5);
}
