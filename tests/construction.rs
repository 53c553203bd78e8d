//! Catalog Construction Integration Tests
//!
//! Inconsistent static data must fail loudly when the catalog is built.

use soma_content::content::all_entries;
use soma_content::domain::{ComplexityLevel, ContentKind, Entry, EntryId, LevelContent};
use soma_content::library::{builtin, Catalog, CatalogError};

#[test]
fn test_builtin_catalog_builds() {
    let catalog = builtin().unwrap();
    assert_eq!(catalog.len(), all_entries().len());

    // Cached: the same instance every time
    assert!(std::ptr::eq(catalog, builtin().unwrap()));
}

#[test]
fn test_duplicate_builtin_entry_is_rejected() {
    let mut entries = all_entries();
    let copy = entries[3].clone();
    let id = copy.id.clone();
    entries.push(copy);

    let result = Catalog::from_entries(entries);
    assert_eq!(result.unwrap_err(), CatalogError::DuplicateId { id });
}

#[test]
fn test_level_mismatch_is_rejected() {
    let mut entry = Entry::new("mismatch", ContentKind::Topic, "Mismatch");
    entry.levels.insert(
        ComplexityLevel::BASIC,
        LevelContent::new(ComplexityLevel::EXPERT, "Summary", "Body"),
    );

    let result = Catalog::from_entries([entry]);
    assert!(result.is_err());

    match result {
        Err(CatalogError::LevelMismatch { id, key, level }) => {
            assert_eq!(id, EntryId::new("mismatch"));
            assert_eq!(key, ComplexityLevel::BASIC);
            assert_eq!(level, ComplexityLevel::EXPERT);
        }
        _ => panic!("Expected LevelMismatch"),
    }
}

#[test]
fn test_error_messages() {
    let err = CatalogError::DuplicateId {
        id: EntryId::new("septic-shock"),
    };
    assert_eq!(err.to_string(), "Duplicate entry id: septic-shock");
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_entries(Vec::<Entry>::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.categories().is_empty());
    assert!(catalog.search("").is_empty());
}
