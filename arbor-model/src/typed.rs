//! The polymorphic wrapper traits.
//!
//! [`TypedItem`] is what the registry hands back: either a registered
//! concrete type or the base [`Item`] wrapper. [`DomainItem`] marks the
//! registry-constrained specializations: types whose construction is only
//! valid over their registered template.

use crate::{Item, Result};
use arbor_types::{ItemIdentity, TemplateId};
use std::any::Any;

/// A typed view over one raw item.
///
/// Wrapper instances are ephemeral: constructed per traversal or lookup
/// call, never cached. Equality between wrappers is the base item's
/// identity-triple equality.
pub trait TypedItem: Any + Send + Sync {
    /// The base wrapper this view is built on.
    fn item(&self) -> &Item;

    /// The wrapped item's identity triple.
    fn identity(&self) -> ItemIdentity {
        self.item().identity()
    }

    /// The wrapped item's template.
    fn template_id(&self) -> TemplateId {
        self.item().template_id()
    }
}

/// A registry-constrained wrapper type.
///
/// Implement through [`domain_object!`](crate::domain_object), then register
/// with [`TypeRegistry::builder`](crate::TypeRegistry::builder).
pub trait DomainItem: TypedItem + Sized {
    /// Wraps without checking the template binding.
    ///
    /// Registry factories call this after their own template match; everyone
    /// else goes through [`from_item`](Self::from_item).
    fn wrap(item: Item) -> Self;

    /// Checked construction: the item's template must be primarily mapped to
    /// `Self` in the registry the item carries.
    ///
    /// # Errors
    ///
    /// [`ModelError::TemplateNotRegistered`](crate::ModelError::TemplateNotRegistered)
    /// or
    /// [`ModelError::TemplateMismatch`](crate::ModelError::TemplateMismatch).
    /// Both are configuration defects: construction is aborted rather than
    /// producing a wrapper with nonsensical field semantics.
    fn from_item(item: Item) -> Result<Self> {
        item.resolver()
            .registry()
            .check_binding::<Self>(item.template_id())?;
        Ok(Self::wrap(item))
    }
}

/// Downcasts a boxed wrapper to a concrete type.
pub(crate) fn downcast_boxed<T: TypedItem>(wrapper: Box<dyn TypedItem>) -> Option<T> {
    let any: Box<dyn Any> = wrapper;
    any.downcast::<T>().ok().map(|boxed| *boxed)
}

/// Collapses a filtered sequence back to the absence convention:
/// filtered-to-nothing reads the same as nothing-to-filter.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Declares a domain-object type: the struct, its wrapper plumbing, and a
/// `Deref` to [`Item`](crate::Item) so traversal and field access read
/// naturally on the derived type.
#[macro_export]
macro_rules! domain_object {
    ($(#[$meta:meta])* $vis:vis struct $name:ident) => {
        $(#[$meta])*
        $vis struct $name {
            item: $crate::Item,
        }

        impl $crate::TypedItem for $name {
            fn item(&self) -> &$crate::Item {
                &self.item
            }
        }

        impl $crate::DomainItem for $name {
            fn wrap(item: $crate::Item) -> Self {
                Self { item }
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::Item;

            fn deref(&self) -> &Self::Target {
                &self.item
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(::std::stringify!($name)).field(&self.item).finish()
            }
        }
    };
}
