//! Content Audit Integration Tests
//!
//! The built-in library must pass the authoring checks without errors.

use soma_content::domain::{ContentKind, CrossReference, Entry};
use soma_content::library::{builtin, Catalog, CheckKind, Severity};

#[test]
fn test_builtin_audit_has_no_errors() {
    let catalog = builtin().unwrap();
    let report = catalog.audit();

    assert_eq!(report.entries_checked, catalog.len());
    let errors: Vec<String> = report.errors().map(|i| i.to_string()).collect();
    assert!(errors.is_empty(), "audit errors: {:#?}", errors);
    assert!(report.is_clean());
}

#[test]
fn test_builtin_dangling_references_are_warnings() {
    let report = builtin().unwrap().audit();

    let dangling: Vec<_> = report
        .for_entry("mental-health-tdah-adhd")
        .filter(|i| i.check == CheckKind::CrossReferences)
        .collect();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].severity, Severity::Warning);
}

#[test]
fn test_placeholder_content_is_an_error() {
    let catalog = Catalog::from_entries([Entry::new("wip", ContentKind::Topic, "TODO name")
        .with_localized_name("Nombre")
        .with_cross_reference(CrossReference::new("", "topic", "related", "Nothing"))])
    .unwrap();

    let report = catalog.audit();
    assert!(!report.is_clean());
    assert!(report
        .errors()
        .any(|i| i.check == CheckKind::ContentQuality));
    assert!(report
        .errors()
        .any(|i| i.check == CheckKind::CrossReferences));
    // Neither levels nor clinical profile
    assert!(report.errors().any(|i| i.check == CheckKind::Structure));
}
