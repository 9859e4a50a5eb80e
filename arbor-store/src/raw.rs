//! The raw content node contract.
//!
//! A raw item is a generic, template-typed, field-bearing record. The host
//! store owns every node's lifetime; the item layer holds `Arc` handles and
//! never caches them across calls.

use arbor_types::{FieldId, ItemId, ItemPath, Language, TemplateId, Version};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One content node as the host store exposes it.
///
/// Tree accessors (`parent`, `children`, `descendants`) hand back fresh
/// handles on every call; the layer above re-resolves rather than caching.
pub trait RawItem: Send + Sync {
    /// The item's store identifier.
    fn id(&self) -> ItemId;

    /// The revision this handle observes.
    fn version(&self) -> Version;

    /// The language this handle observes.
    fn language(&self) -> Language;

    /// The template this item is built from.
    fn template_id(&self) -> TemplateId;

    /// The item's name, its final path segment.
    fn name(&self) -> String;

    /// The item's current position in the tree.
    fn path(&self) -> ItemPath;

    /// The parent node, absent at the root.
    fn parent(&self) -> Option<Arc<dyn RawItem>>;

    /// Whether this item has any children, without materializing them.
    fn has_children(&self) -> bool;

    /// The children in store order.
    fn children(&self) -> Vec<Arc<dyn RawItem>>;

    /// Every descendant, host-computed in bulk (depth-first preorder).
    fn descendants(&self) -> Vec<Arc<dyn RawItem>>;

    /// Looks up a field by its id.
    fn field_by_id(&self, id: FieldId) -> Option<Arc<dyn RawField>>;

    /// Looks up a field by its name.
    fn field_by_name(&self, name: &str) -> Option<Arc<dyn RawField>>;
}

/// One field of a raw item.
///
/// `set_value` takes `&self`: the host keeps field values behind interior
/// mutability and owns whatever write discipline applies.
pub trait RawField: Send + Sync {
    /// The field's identifier.
    fn id(&self) -> FieldId;

    /// The field's name.
    fn name(&self) -> String;

    /// The current raw string value.
    fn value(&self) -> String;

    /// Replaces the raw string value.
    fn set_value(&self, value: &str);
}

/// One inbound-reference record from the link index.
///
/// Carries identifiers only; the item layer re-fetches the source item
/// through the [`ContentStore`](crate::ContentStore) so every resolution
/// goes through the type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLink {
    /// The item holding the reference.
    pub source_id: ItemId,
    /// The item being referenced.
    pub target_id: ItemId,
}

impl ItemLink {
    /// Creates a link record.
    #[must_use]
    pub const fn new(source_id: ItemId, target_id: ItemId) -> Self {
        Self {
            source_id,
            target_id,
        }
    }
}
