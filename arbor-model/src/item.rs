//! The base item wrapper: identity, equality, and traversal.
//!
//! Every traversal operation that can produce "nothing" returns an
//! `Option`. The convention is deliberate: `None` means the relation
//! does not exist (no children, no referrers, no matching ancestor), and a
//! filter that matches nothing collapses back to `None` as well. Callers
//! never receive an empty sequence.

use crate::typed::{downcast_boxed, non_empty};
use crate::{Resolver, TypedItem};
use arbor_store::RawItem;
use arbor_types::{ItemId, ItemIdentity, ItemPath, Language, TemplateId, Version};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

/// Observer invoked with the field's name around a mutation.
pub type FieldObserver = Box<dyn Fn(&str) + Send + Sync>;

/// The generic typed view over one raw item.
///
/// Wraps exactly one raw handle for its lifetime; constructed on demand per
/// traversal or lookup call and never cached. Two wrappers are equal iff
/// their identity triples are equal, regardless of which in-memory raw node
/// each one holds.
pub struct Item {
    raw: Arc<dyn RawItem>,
    resolver: Resolver,
    pub(crate) changing: Mutex<Vec<FieldObserver>>,
    pub(crate) changed: Mutex<Vec<FieldObserver>>,
}

impl Item {
    /// Wraps a raw item with its resolution context.
    #[must_use]
    pub fn new(raw: Arc<dyn RawItem>, resolver: Resolver) -> Self {
        Self {
            raw,
            resolver,
            changing: Mutex::new(Vec::new()),
            changed: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped raw item.
    #[must_use]
    pub fn raw(&self) -> &dyn RawItem {
        self.raw.as_ref()
    }

    /// The resolution context this wrapper carries.
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The item's store identifier.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.raw.id()
    }

    /// The revision this wrapper observes.
    #[must_use]
    pub fn version(&self) -> Version {
        self.raw.version()
    }

    /// The language this wrapper observes.
    #[must_use]
    pub fn language(&self) -> Language {
        self.raw.language()
    }

    /// The template the item is built from.
    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.raw.template_id()
    }

    /// The item's name.
    #[must_use]
    pub fn name(&self) -> String {
        self.raw.name()
    }

    /// The item's current tree position.
    #[must_use]
    pub fn path(&self) -> ItemPath {
        self.raw.path()
    }

    /// The identity triple governing equality.
    #[must_use]
    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity::new(self.raw.id(), self.raw.version(), self.raw.language())
    }

    // ── Traversal ─────────────────────────────────────────────────

    /// The typed parent; absent at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Box<dyn TypedItem>> {
        self.resolver.resolve(self.raw.parent())
    }

    /// The typed children in store order; absent when none exist.
    #[must_use]
    pub fn children(&self) -> Option<Vec<Box<dyn TypedItem>>> {
        if !self.raw.has_children() {
            return None;
        }
        let resolved: Vec<Box<dyn TypedItem>> = self
            .raw
            .children()
            .into_iter()
            .filter_map(|child| self.resolver.resolve(Some(child)))
            .collect();
        non_empty(resolved)
    }

    /// The child with the given name (ASCII-case-insensitive); absent when
    /// no child carries it.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Box<dyn TypedItem>> {
        let raw = self
            .raw
            .children()
            .into_iter()
            .find(|child| child.name().eq_ignore_ascii_case(name))?;
        self.resolver.resolve(Some(raw))
    }

    /// The children that resolve to `T`; absent when none do.
    #[must_use]
    pub fn children_of_type<T: TypedItem>(&self) -> Option<Vec<T>> {
        non_empty(
            self.children()?
                .into_iter()
                .filter_map(downcast_boxed::<T>)
                .collect(),
        )
    }

    /// The children whose wrapper type declares `capability`; absent when
    /// none do.
    #[must_use]
    pub fn children_with_capability(
        &self,
        capability: TemplateId,
    ) -> Option<Vec<Box<dyn TypedItem>>> {
        self.filter_capability(self.children()?, capability)
    }

    /// Walks parents upward and returns the first ancestor resolving to
    /// `T`; absent upon reaching the root without a match. The tree is
    /// acyclic, so the walk never revisits a node.
    #[must_use]
    pub fn first_ancestor_of_type<T: TypedItem>(&self) -> Option<T> {
        let mut current = self.raw.parent();
        while let Some(raw) = current {
            current = raw.parent();
            if let Some(found) = self.resolver.resolve(Some(raw)).and_then(downcast_boxed::<T>) {
                return Some(found);
            }
        }
        None
    }

    /// Walks parents upward and returns the first ancestor whose wrapper
    /// type declares `capability`.
    #[must_use]
    pub fn first_ancestor_with_capability(
        &self,
        capability: TemplateId,
    ) -> Option<Box<dyn TypedItem>> {
        let registry = self.resolver.registry();
        let mut current = self.raw.parent();
        while let Some(raw) = current {
            current = raw.parent();
            if let Some(wrapper) = self.resolver.resolve(Some(raw)) {
                if registry.wrapper_has_capability(wrapper.as_ref(), capability) {
                    return Some(wrapper);
                }
            }
        }
        None
    }

    /// Every typed descendant, from one bulk store call; absent when none
    /// exist.
    #[must_use]
    pub fn descendants(&self) -> Option<Vec<Box<dyn TypedItem>>> {
        let resolved: Vec<Box<dyn TypedItem>> = self
            .raw
            .descendants()
            .into_iter()
            .filter_map(|descendant| self.resolver.resolve(Some(descendant)))
            .collect();
        non_empty(resolved)
    }

    /// The descendants that resolve to `T`; absent when none do.
    #[must_use]
    pub fn descendants_of_type<T: TypedItem>(&self) -> Option<Vec<T>> {
        non_empty(
            self.descendants()?
                .into_iter()
                .filter_map(downcast_boxed::<T>)
                .collect(),
        )
    }

    /// The descendants whose wrapper type declares `capability`.
    #[must_use]
    pub fn descendants_with_capability(
        &self,
        capability: TemplateId,
    ) -> Option<Vec<Box<dyn TypedItem>>> {
        self.filter_capability(self.descendants()?, capability)
    }

    /// The items referencing this one, per the link index; each link's
    /// source is re-fetched from the store and resolved. Absent when no
    /// inbound link resolves.
    #[must_use]
    pub fn referrers(&self) -> Option<Vec<Box<dyn TypedItem>>> {
        let resolved: Vec<Box<dyn TypedItem>> = self
            .resolver
            .links()
            .referrers(self.raw.as_ref())
            .into_iter()
            .filter_map(|link| self.resolver.item_by_id(link.source_id))
            .collect();
        non_empty(resolved)
    }

    /// The referrers that resolve to `T`; absent when none do.
    #[must_use]
    pub fn referrers_of_type<T: TypedItem>(&self) -> Option<Vec<T>> {
        non_empty(
            self.referrers()?
                .into_iter()
                .filter_map(downcast_boxed::<T>)
                .collect(),
        )
    }

    /// The referrers whose wrapper type declares `capability`.
    #[must_use]
    pub fn referrers_with_capability(
        &self,
        capability: TemplateId,
    ) -> Option<Vec<Box<dyn TypedItem>>> {
        self.filter_capability(self.referrers()?, capability)
    }

    fn filter_capability(
        &self,
        items: Vec<Box<dyn TypedItem>>,
        capability: TemplateId,
    ) -> Option<Vec<Box<dyn TypedItem>>> {
        let registry = self.resolver.registry();
        non_empty(
            items
                .into_iter()
                .filter(|wrapper| registry.wrapper_has_capability(wrapper.as_ref(), capability))
                .collect(),
        )
    }
}

impl TypedItem for Item {
    fn item(&self) -> &Item {
        self
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({} @ {})", self.identity(), self.path())
    }
}
