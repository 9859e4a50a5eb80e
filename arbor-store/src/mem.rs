//! In-memory reference adapter.
//!
//! A HashMap-backed host store for tests and embedded hosts. It implements
//! the full boundary (tree wiring, field mutation behind interior
//! mutability, a flat link table) but none of what a real backend adds:
//! no persistence, no indexing, no transactions.

use crate::{ContentStore, ItemLink, LinkIndex, RawField, RawItem, StoreError, StoreResult};
use arbor_types::{FieldId, ItemId, ItemPath, Language, TemplateId, Version};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

/// Declarative description of one item to insert.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub id: ItemId,
    pub name: String,
    pub template_id: TemplateId,
    pub parent: Option<ItemId>,
    pub version: Version,
    pub language: Language,
    pub fields: Vec<(FieldId, String, String)>,
}

impl ItemSpec {
    /// Starts a spec for a root-level item with a fresh random id.
    pub fn new(name: impl Into<String>, template_id: TemplateId) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            template_id,
            parent: None,
            version: Version::FIRST,
            language: Language::default(),
            fields: Vec::new(),
        }
    }

    /// Uses a well-known id instead of a random one.
    #[must_use]
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    /// Places the item under a parent.
    #[must_use]
    pub fn under(mut self, parent: ItemId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the version number.
    #[must_use]
    pub fn version(mut self, number: u32) -> Self {
        self.version = Version::new(number);
        self
    }

    /// Sets the language code.
    #[must_use]
    pub fn language(mut self, code: &str) -> Self {
        self.language = Language::from(code);
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, id: FieldId, name: &str, value: &str) -> Self {
        self.fields.push((id, name.to_string(), value.to_string()));
        self
    }
}

#[derive(Default)]
struct StoreInner {
    items: RwLock<HashMap<ItemId, Arc<MemoryItem>>>,
}

/// The in-memory content store. Cheap to clone; clones share the tree.
#[derive(Default, Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, wiring it under its parent.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateItem`] when the id is taken,
    /// [`StoreError::ParentNotFound`] when the named parent is absent.
    pub fn insert(&self, spec: ItemSpec) -> StoreResult<ItemId> {
        let mut items = self.inner.items.write().expect("store lock poisoned");
        if items.contains_key(&spec.id) {
            return Err(StoreError::DuplicateItem(spec.id));
        }
        if let Some(parent_id) = spec.parent {
            let parent = items
                .get(&parent_id)
                .ok_or(StoreError::ParentNotFound(parent_id))?;
            parent
                .children
                .write()
                .expect("children lock poisoned")
                .push(spec.id);
        }
        let item = Arc::new(MemoryItem {
            store: Arc::downgrade(&self.inner),
            id: spec.id,
            template_id: spec.template_id,
            version: spec.version,
            language: spec.language,
            name: spec.name,
            parent: spec.parent,
            children: RwLock::new(Vec::new()),
            fields: spec
                .fields
                .into_iter()
                .map(|(id, name, value)| {
                    Arc::new(MemoryField {
                        id,
                        name,
                        value: RwLock::new(value),
                    })
                })
                .collect(),
        });
        items.insert(item.id, item);
        Ok(spec.id)
    }
}

impl ContentStore for MemoryStore {
    fn item_by_id(&self, id: ItemId) -> Option<Arc<dyn RawItem>> {
        let items = self.inner.items.read().expect("store lock poisoned");
        items.get(&id).cloned().map(|item| item as Arc<dyn RawItem>)
    }

    fn item_by_path(&self, path: &ItemPath) -> Option<Arc<dyn RawItem>> {
        // Computing a path re-enters the item map, so snapshot the handles
        // before walking.
        let candidates: Vec<Arc<MemoryItem>> = {
            let items = self.inner.items.read().expect("store lock poisoned");
            items.values().cloned().collect()
        };
        candidates
            .into_iter()
            .find(|item| &item.item_path() == path)
            .map(|item| item as Arc<dyn RawItem>)
    }
}

struct MemoryItem {
    store: Weak<StoreInner>,
    id: ItemId,
    template_id: TemplateId,
    version: Version,
    language: Language,
    name: String,
    parent: Option<ItemId>,
    children: RwLock<Vec<ItemId>>,
    fields: Vec<Arc<MemoryField>>,
}

impl MemoryItem {
    fn item_path(&self) -> ItemPath {
        let mut segments = vec![self.name.clone()];
        if let Some(store) = self.store.upgrade() {
            let items = store.items.read().expect("store lock poisoned");
            let mut parent = self.parent;
            while let Some(parent_id) = parent {
                let Some(node) = items.get(&parent_id) else {
                    break;
                };
                segments.push(node.name.clone());
                parent = node.parent;
            }
        }
        segments.reverse();
        ItemPath::new(format!("/{}", segments.join("/")))
    }
}

impl RawItem for MemoryItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn language(&self) -> Language {
        self.language.clone()
    }

    fn template_id(&self) -> TemplateId {
        self.template_id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn path(&self) -> ItemPath {
        self.item_path()
    }

    fn parent(&self) -> Option<Arc<dyn RawItem>> {
        let parent_id = self.parent?;
        let store = self.store.upgrade()?;
        let items = store.items.read().expect("store lock poisoned");
        items
            .get(&parent_id)
            .cloned()
            .map(|item| item as Arc<dyn RawItem>)
    }

    fn has_children(&self) -> bool {
        !self.children.read().expect("children lock poisoned").is_empty()
    }

    fn children(&self) -> Vec<Arc<dyn RawItem>> {
        let Some(store) = self.store.upgrade() else {
            return Vec::new();
        };
        let items = store.items.read().expect("store lock poisoned");
        self.children
            .read()
            .expect("children lock poisoned")
            .iter()
            .filter_map(|id| items.get(id).cloned())
            .map(|item| item as Arc<dyn RawItem>)
            .collect()
    }

    fn descendants(&self) -> Vec<Arc<dyn RawItem>> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(Arc::clone(&child));
            out.extend(child.descendants());
        }
        out
    }

    fn field_by_id(&self, id: FieldId) -> Option<Arc<dyn RawField>> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .cloned()
            .map(|field| field as Arc<dyn RawField>)
    }

    fn field_by_name(&self, name: &str) -> Option<Arc<dyn RawField>> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .cloned()
            .map(|field| field as Arc<dyn RawField>)
    }
}

struct MemoryField {
    id: FieldId,
    name: String,
    value: RwLock<String>,
}

impl RawField for MemoryField {
    fn id(&self) -> FieldId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.read().expect("field lock poisoned").clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.write().expect("field lock poisoned") = value.to_string();
    }
}

/// The in-memory link index. Cheap to clone; clones share the table.
#[derive(Default, Clone)]
pub struct MemoryLinkIndex {
    links: Arc<RwLock<Vec<ItemLink>>>,
}

impl MemoryLinkIndex {
    /// Creates an empty link index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reference from `source_id` to `target_id`.
    pub fn add(&self, source_id: ItemId, target_id: ItemId) {
        self.links
            .write()
            .expect("link lock poisoned")
            .push(ItemLink::new(source_id, target_id));
    }
}

impl LinkIndex for MemoryLinkIndex {
    fn referrers(&self, target: &dyn RawItem) -> Vec<ItemLink> {
        let target_id = target.id();
        self.links
            .read()
            .expect("link lock poisoned")
            .iter()
            .copied()
            .filter(|link| link.target_id == target_id)
            .collect()
    }
}
