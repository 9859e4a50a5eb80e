//! The resolution context: registry plus store collaborators.
//!
//! Everything a wrapper needs to navigate (the type table, the content
//! store, the link index) travels in one explicit, cheaply-cloned handle.
//! There is no process-wide default: hosts construct a `Resolver` at
//! startup and pass it down.

use crate::{Item, TypeRegistry, TypedItem};
use arbor_store::{ContentStore, LinkIndex, RawItem};
use arbor_types::{ItemId, ItemPath};
use std::sync::Arc;

/// Resolves raw items into typed wrappers.
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<TypeRegistry>,
    store: Arc<dyn ContentStore>,
    links: Arc<dyn LinkIndex>,
}

impl Resolver {
    /// Bundles a registry with its store collaborators.
    pub fn new(
        registry: Arc<TypeRegistry>,
        store: Arc<dyn ContentStore>,
        links: Arc<dyn LinkIndex>,
    ) -> Self {
        Self {
            registry,
            store,
            links,
        }
    }

    /// The type table.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The content store.
    #[must_use]
    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    /// The link index.
    #[must_use]
    pub fn links(&self) -> &dyn LinkIndex {
        self.links.as_ref()
    }

    /// Resolves a raw item into its typed wrapper.
    ///
    /// Absent input stays absent. A template with a primary mapping yields
    /// exactly the mapped concrete type; anything else yields the base
    /// [`Item`] wrapper. A fresh wrapper is constructed on every call.
    #[must_use]
    pub fn resolve(&self, raw: Option<Arc<dyn RawItem>>) -> Option<Box<dyn TypedItem>> {
        let raw = raw?;
        let item = Item::new(raw, self.clone());
        Some(match self.registry.primary(item.template_id()) {
            Some(descriptor) => descriptor.create(item),
            None => Box::new(item),
        })
    }

    /// Fetches by id and resolves.
    #[must_use]
    pub fn item_by_id(&self, id: ItemId) -> Option<Box<dyn TypedItem>> {
        self.resolve(self.store.item_by_id(id))
    }

    /// Fetches by path and resolves.
    #[must_use]
    pub fn item_by_path(&self, path: &ItemPath) -> Option<Box<dyn TypedItem>> {
        self.resolve(self.store.item_by_path(path))
    }
}
