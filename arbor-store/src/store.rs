//! Store and link-index lookup contracts.

use crate::{ItemLink, RawItem};
use arbor_types::{ItemId, ItemPath};
use std::sync::Arc;

/// Fetch access to the host content store.
///
/// Lookups return absence for anything the host cannot produce: missing
/// items, denied items, broken backends alike. The item layer never sees
/// the difference and never retries.
pub trait ContentStore: Send + Sync {
    /// Fetches an item by id.
    fn item_by_id(&self, id: ItemId) -> Option<Arc<dyn RawItem>>;

    /// Fetches an item by its tree path.
    fn item_by_path(&self, path: &ItemPath) -> Option<Arc<dyn RawItem>>;
}

/// Inbound-reference lookup, backed by the host's link index.
pub trait LinkIndex: Send + Sync {
    /// Returns every link whose target is `target`, in index order.
    fn referrers(&self, target: &dyn RawItem) -> Vec<ItemLink>;
}
