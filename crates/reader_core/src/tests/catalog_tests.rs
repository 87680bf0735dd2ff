use shared::domain::{Essay, EssayId};
use shared::error::CatalogError;

use crate::catalog::{builtin_essays, Catalog};

fn essay(id: &str) -> Essay {
    Essay {
        id: EssayId::new(id),
        title: format!("Title for {id}"),
        excerpt: "An excerpt.".to_string(),
        date: "January 1, 2025".to_string(),
        read_time: "3 min read".to_string(),
        content: "First paragraph.\n\nSecond paragraph.".to_string(),
        featured: false,
    }
}

#[test]
fn builtin_data_passes_the_validating_constructor() {
    let catalog = Catalog::new(builtin_essays()).expect("built-in essays are valid");
    assert_eq!(catalog.len(), 3);
}

#[test]
fn builtin_catalog_keeps_authored_order() {
    let ids: Vec<&str> = Catalog::builtin()
        .iter()
        .map(|essay| essay.id.as_str())
        .collect();
    assert_eq!(
        ids,
        [
            "digital-minimalism",
            "art-of-questioning",
            "philosophy-of-simplicity",
        ]
    );
}

#[test]
fn enumeration_is_stable_across_passes() {
    let catalog = Catalog::builtin();
    let first: Vec<EssayId> = catalog.iter().map(|essay| essay.id.clone()).collect();
    let second: Vec<EssayId> = catalog.iter().map(|essay| essay.id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn lookup_finds_known_ids_and_rejects_unknown_ones() {
    let catalog = Catalog::builtin();
    let known = EssayId::new("art-of-questioning");
    let unknown = EssayId::new("letters-to-no-one");

    assert!(catalog.contains(&known));
    assert_eq!(
        catalog.get(&known).map(|essay| essay.title.as_str()),
        Some("The Art of Asking Better Questions")
    );
    assert!(!catalog.contains(&unknown));
    assert!(catalog.get(&unknown).is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let result = Catalog::new(vec![essay("twice"), essay("twice")]);
    assert_eq!(
        result.err(),
        Some(CatalogError::DuplicateId {
            id: "twice".to_string()
        })
    );
}

#[test]
fn blank_ids_are_rejected() {
    let result = Catalog::new(vec![essay("  ")]);
    assert_eq!(result.err(), Some(CatalogError::BlankId));
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = Catalog::new(Vec::new()).expect("empty catalog is fine");
    assert!(catalog.is_empty());
}
