use arbor_store::mem::{ItemSpec, MemoryLinkIndex, MemoryStore};
use arbor_store::{ContentStore, LinkIndex, RawField, RawItem, StoreError};
use arbor_types::{FieldId, ItemId, ItemPath, TemplateId};
use pretty_assertions::assert_eq;

const FOLDER: TemplateId = TemplateId::from_u128(0xF0);
const PAGE: TemplateId = TemplateId::from_u128(0xF1);

/// Root with two pages, the first of which has a grandchild.
fn small_tree(store: &MemoryStore) -> (ItemId, ItemId, ItemId, ItemId) {
    let root = store.insert(ItemSpec::new("arbor", FOLDER)).unwrap();
    let a = store.insert(ItemSpec::new("a", PAGE).under(root)).unwrap();
    let b = store.insert(ItemSpec::new("b", PAGE).under(root)).unwrap();
    let leaf = store.insert(ItemSpec::new("leaf", PAGE).under(a)).unwrap();
    (root, a, b, leaf)
}

// ── Insertion ─────────────────────────────────────────────────────

#[test]
fn insert_rejects_duplicate_id() {
    let store = MemoryStore::new();
    let id = ItemId::new();
    store
        .insert(ItemSpec::new("one", FOLDER).with_id(id))
        .unwrap();
    let err = store
        .insert(ItemSpec::new("two", FOLDER).with_id(id))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateItem(other) if other == id));
}

#[test]
fn insert_rejects_missing_parent() {
    let store = MemoryStore::new();
    let missing = ItemId::new();
    let err = store
        .insert(ItemSpec::new("orphan", PAGE).under(missing))
        .unwrap_err();
    assert!(matches!(err, StoreError::ParentNotFound(other) if other == missing));
}

// ── Lookup ────────────────────────────────────────────────────────

#[test]
fn item_by_id_finds_inserted_item() {
    let store = MemoryStore::new();
    let (root, ..) = small_tree(&store);
    let item = store.item_by_id(root).unwrap();
    assert_eq!(item.id(), root);
    assert_eq!(item.name(), "arbor");
}

#[test]
fn item_by_id_is_absent_for_unknown() {
    let store = MemoryStore::new();
    assert!(store.item_by_id(ItemId::new()).is_none());
}

#[test]
fn item_by_path_walks_the_tree() {
    let store = MemoryStore::new();
    let (_, _, _, leaf) = small_tree(&store);
    let item = store.item_by_path(&ItemPath::new("/arbor/a/leaf")).unwrap();
    assert_eq!(item.id(), leaf);
}

#[test]
fn item_by_path_ignores_case() {
    let store = MemoryStore::new();
    let (_, a, ..) = small_tree(&store);
    let item = store.item_by_path(&ItemPath::new("/ARBOR/A")).unwrap();
    assert_eq!(item.id(), a);
}

// ── Tree shape ────────────────────────────────────────────────────

#[test]
fn paths_reflect_positions() {
    let store = MemoryStore::new();
    let (root, _, _, leaf) = small_tree(&store);
    assert_eq!(store.item_by_id(root).unwrap().path(), ItemPath::new("/arbor"));
    assert_eq!(
        store.item_by_id(leaf).unwrap().path(),
        ItemPath::new("/arbor/a/leaf")
    );
}

#[test]
fn parent_links_resolve() {
    let store = MemoryStore::new();
    let (root, a, _, leaf) = small_tree(&store);
    let leaf_item = store.item_by_id(leaf).unwrap();
    let parent = leaf_item.parent().unwrap();
    assert_eq!(parent.id(), a);
    assert_eq!(parent.parent().unwrap().id(), root);
    assert!(store.item_by_id(root).unwrap().parent().is_none());
}

#[test]
fn children_preserve_insertion_order() {
    let store = MemoryStore::new();
    let (root, a, b, _) = small_tree(&store);
    let children = store.item_by_id(root).unwrap().children();
    let ids: Vec<ItemId> = children.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn has_children_without_materializing() {
    let store = MemoryStore::new();
    let (root, _, b, _) = small_tree(&store);
    assert!(store.item_by_id(root).unwrap().has_children());
    assert!(!store.item_by_id(b).unwrap().has_children());
}

#[test]
fn descendants_are_depth_first_preorder() {
    let store = MemoryStore::new();
    let (root, a, b, leaf) = small_tree(&store);
    let ids: Vec<ItemId> = store
        .item_by_id(root)
        .unwrap()
        .descendants()
        .iter()
        .map(|d| d.id())
        .collect();
    assert_eq!(ids, vec![a, leaf, b]);
}

// ── Fields ────────────────────────────────────────────────────────

#[test]
fn fields_resolve_by_id_and_name() {
    let store = MemoryStore::new();
    let title = FieldId::new();
    let id = store
        .insert(ItemSpec::new("page", PAGE).field(title, "Title", "Hello"))
        .unwrap();
    let item = store.item_by_id(id).unwrap();

    assert_eq!(item.field_by_id(title).unwrap().value(), "Hello");
    assert_eq!(item.field_by_name("Title").unwrap().value(), "Hello");
    // Name lookup is case-insensitive, like path lookup.
    assert_eq!(item.field_by_name("title").unwrap().value(), "Hello");
    assert!(item.field_by_id(FieldId::new()).is_none());
    assert!(item.field_by_name("Missing").is_none());
}

#[test]
fn field_writes_are_visible_through_other_handles() {
    let store = MemoryStore::new();
    let title = FieldId::new();
    let id = store
        .insert(ItemSpec::new("page", PAGE).field(title, "Title", "before"))
        .unwrap();

    let first = store.item_by_id(id).unwrap();
    let second = store.item_by_id(id).unwrap();
    first.field_by_id(title).unwrap().set_value("after");
    assert_eq!(second.field_by_id(title).unwrap().value(), "after");
}

// ── Link index ────────────────────────────────────────────────────

#[test]
fn referrers_filter_by_target() {
    let store = MemoryStore::new();
    let (root, a, b, leaf) = small_tree(&store);
    let links = MemoryLinkIndex::new();
    links.add(a, leaf);
    links.add(b, leaf);
    links.add(root, a);

    let leaf_item = store.item_by_id(leaf).unwrap();
    let inbound = links.referrers(leaf_item.as_ref());
    let sources: Vec<ItemId> = inbound.iter().map(|l| l.source_id).collect();
    assert_eq!(sources, vec![a, b]);

    let b_item = store.item_by_id(b).unwrap();
    assert!(links.referrers(b_item.as_ref()).is_empty());
}
