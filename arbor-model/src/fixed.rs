//! Well-known singleton locations, resolved by id with path verification.
//!
//! A fixed path tolerates items that have been moved (the identifier stays
//! authoritative) while self-healing when an item at the canonical path
//! still exists.

use crate::{DomainItem, Item, Resolver, Result, TypedItem};
use arbor_store::{ContentStore, RawItem};
use arbor_types::{ItemId, ItemPath};
use std::sync::Arc;
use tracing::warn;

/// A well-known location: the item's identifier plus its canonical path.
#[derive(Debug, Clone, Copy)]
pub struct FixedPath {
    id: ItemId,
    path: &'static str,
}

impl FixedPath {
    /// Declares a fixed location, usable in constants.
    #[must_use]
    pub const fn new(id: ItemId, path: &'static str) -> Self {
        Self { id, path }
    }

    /// The well-known identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// The canonical path.
    #[must_use]
    pub fn path(&self) -> ItemPath {
        ItemPath::new(self.path)
    }

    /// Resolves the location to a typed wrapper.
    ///
    /// Id lookup wins when the found item still sits at the canonical path.
    /// A moved item yields the canonical-path occupant when one exists,
    /// else the moved item itself. A dead id falls back to path lookup.
    /// Absent when neither resolves.
    #[must_use]
    pub fn resolve(&self, resolver: &Resolver) -> Option<Box<dyn TypedItem>> {
        resolver.resolve(self.locate(resolver))
    }

    /// Resolves the location as a specific domain type.
    ///
    /// Absence stays `Ok(None)`.
    ///
    /// # Errors
    ///
    /// A located item whose template is not bound to `T` is the
    /// configuration defect of
    /// [`DomainItem::from_item`]; construction is aborted.
    pub fn resolve_as<T: DomainItem>(&self, resolver: &Resolver) -> Result<Option<T>> {
        match self.locate(resolver) {
            None => Ok(None),
            Some(raw) => T::from_item(Item::new(raw, resolver.clone())).map(Some),
        }
    }

    fn locate(&self, resolver: &Resolver) -> Option<Arc<dyn RawItem>> {
        let canonical = self.path();
        let store = resolver.store();
        match store.item_by_id(self.id) {
            Some(by_id) if by_id.path() == canonical => Some(by_id),
            Some(by_id) => {
                warn!(
                    id = %self.id,
                    found = %by_id.path(),
                    expected = %canonical,
                    "fixed item has moved; preferring the canonical path"
                );
                store.item_by_path(&canonical).or(Some(by_id))
            }
            None => store.item_by_path(&canonical),
        }
    }
}
