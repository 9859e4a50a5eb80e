use arbor_types::{ItemId, ItemIdentity, Language, Version};
use std::collections::HashSet;

fn identity(id: ItemId, version: u32, language: &str) -> ItemIdentity {
    ItemIdentity::new(id, Version::new(version), Language::from(language))
}

// ── Version ───────────────────────────────────────────────────────

#[test]
fn version_default_is_first() {
    assert_eq!(Version::default(), Version::FIRST);
    assert_eq!(Version::default().number(), 1);
}

#[test]
fn version_display() {
    assert_eq!(Version::new(3).to_string(), "v3");
}

#[test]
fn version_ordering() {
    assert!(Version::new(1) < Version::new(2));
}

// ── Language ──────────────────────────────────────────────────────

#[test]
fn language_default_is_en() {
    assert_eq!(Language::default().as_str(), "en");
}

#[test]
fn language_comparison_is_exact() {
    assert_ne!(Language::from("en"), Language::from("en-GB"));
    assert_ne!(Language::from("en"), Language::from("EN"));
}

// ── ItemIdentity ──────────────────────────────────────────────────

#[test]
fn identical_triples_are_equal() {
    let id = ItemId::new();
    assert_eq!(identity(id, 2, "en"), identity(id, 2, "en"));
}

#[test]
fn differing_version_breaks_equality() {
    let id = ItemId::new();
    assert_ne!(identity(id, 1, "en"), identity(id, 2, "en"));
}

#[test]
fn differing_language_breaks_equality() {
    let id = ItemId::new();
    assert_ne!(identity(id, 1, "en"), identity(id, 1, "da"));
}

#[test]
fn differing_id_breaks_equality() {
    assert_ne!(
        identity(ItemId::new(), 1, "en"),
        identity(ItemId::new(), 1, "en")
    );
}

#[test]
fn equal_triples_hash_identically() {
    let id = ItemId::new();
    let mut set = HashSet::new();
    set.insert(identity(id, 1, "en"));
    set.insert(identity(id, 1, "en"));
    assert_eq!(set.len(), 1);

    set.insert(identity(id, 2, "en"));
    assert_eq!(set.len(), 2);
}

#[test]
fn identity_display_carries_all_components() {
    let id = ItemId::from_u128(7);
    let s = identity(id, 4, "da").to_string();
    assert!(s.contains(&id.to_string()));
    assert!(s.contains("v4"));
    assert!(s.contains("da"));
}

#[test]
fn identity_serde_roundtrip() {
    let original = identity(ItemId::new(), 5, "jp");
    let json = serde_json::to_string(&original).unwrap();
    let parsed: ItemIdentity = serde_json::from_str(&json).unwrap();
    assert_eq!(original, parsed);
}
