mod common;

use arbor_model::{FixedPath, ModelError};
use arbor_store::mem::ItemSpec;
use arbor_types::ItemId;
use common::{fixture, is_wrapper, Article, Folder, ARTICLE, FOLDER};

const CONFIG_ID: ItemId = ItemId::from_u128(0xC0FF_EE);
const CONFIG: FixedPath = FixedPath::new(CONFIG_ID, "/arbor/system/config");

/// "/arbor/system" scaffolding without the config item itself.
fn scaffolding(fx: &common::Fixture) -> ItemId {
    let root = fx.store.insert(ItemSpec::new("arbor", FOLDER)).unwrap();
    fx.store
        .insert(ItemSpec::new("system", FOLDER).under(root))
        .unwrap()
}

// ── The four resolution outcomes ──────────────────────────────────

#[test]
fn id_hit_at_canonical_path_wins() {
    let fx = fixture();
    let system = scaffolding(&fx);
    fx.store
        .insert(ItemSpec::new("config", ARTICLE).with_id(CONFIG_ID).under(system))
        .unwrap();

    let resolved = CONFIG.resolve(&fx.resolver).unwrap();
    assert_eq!(resolved.item().id(), CONFIG_ID);
    assert!(is_wrapper::<Article>(resolved.as_ref()));
}

#[test]
fn moved_id_hit_prefers_the_canonical_path_occupant() {
    let fx = fixture();
    let system = scaffolding(&fx);
    // The id-matched item has been moved elsewhere...
    let attic = fx.store.insert(ItemSpec::new("attic", FOLDER)).unwrap();
    fx.store
        .insert(ItemSpec::new("config", ARTICLE).with_id(CONFIG_ID).under(attic))
        .unwrap();
    // ...and something else now occupies the canonical path.
    let occupant = fx
        .store
        .insert(ItemSpec::new("config", ARTICLE).under(system))
        .unwrap();

    let resolved = CONFIG.resolve(&fx.resolver).unwrap();
    assert_eq!(resolved.item().id(), occupant);
}

#[test]
fn moved_id_hit_with_vacant_canonical_path_falls_back_to_the_id_match() {
    let fx = fixture();
    scaffolding(&fx);
    let attic = fx.store.insert(ItemSpec::new("attic", FOLDER)).unwrap();
    fx.store
        .insert(ItemSpec::new("config", ARTICLE).with_id(CONFIG_ID).under(attic))
        .unwrap();

    let resolved = CONFIG.resolve(&fx.resolver).unwrap();
    assert_eq!(resolved.item().id(), CONFIG_ID);
    assert_eq!(resolved.item().path(), "/arbor/attic/config".into());
}

#[test]
fn dead_id_falls_back_to_path_lookup() {
    let fx = fixture();
    let system = scaffolding(&fx);
    let occupant = fx
        .store
        .insert(ItemSpec::new("config", ARTICLE).under(system))
        .unwrap();

    let resolved = CONFIG.resolve(&fx.resolver).unwrap();
    assert_eq!(resolved.item().id(), occupant);
}

#[test]
fn both_lookups_failing_is_absent() {
    let fx = fixture();
    scaffolding(&fx);
    assert!(CONFIG.resolve(&fx.resolver).is_none());
}

// ── Typed resolution ──────────────────────────────────────────────

#[test]
fn resolve_as_returns_the_domain_type() {
    let fx = fixture();
    let system = scaffolding(&fx);
    fx.store
        .insert(ItemSpec::new("config", ARTICLE).with_id(CONFIG_ID).under(system))
        .unwrap();

    let config: Article = CONFIG.resolve_as(&fx.resolver).unwrap().unwrap();
    assert_eq!(config.id(), CONFIG_ID);
}

#[test]
fn resolve_as_keeps_absence_ok() {
    let fx = fixture();
    scaffolding(&fx);
    let resolved: Option<Article> = CONFIG.resolve_as(&fx.resolver).unwrap();
    assert!(resolved.is_none());
}

#[test]
fn resolve_as_rejects_a_mismatched_binding() {
    let fx = fixture();
    let system = scaffolding(&fx);
    fx.store
        .insert(ItemSpec::new("config", ARTICLE).with_id(CONFIG_ID).under(system))
        .unwrap();

    let err = CONFIG.resolve_as::<Folder>(&fx.resolver).unwrap_err();
    assert!(matches!(err, ModelError::TemplateMismatch { .. }));
}
