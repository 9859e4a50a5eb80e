//! Typed item engine for Arbor.
//!
//! Presents the generic, template-typed nodes of a host content store as
//! strongly-typed domain objects with navigable relationships, typed field
//! access with change notification, and structural self-validation.
//!
//! # Components
//!
//! - **[`TypeRegistry`]**: a closed table mapping template ids to concrete
//!   wrapper types and capability tags, built once at startup
//! - **[`Item`]**: the base polymorphic wrapper — identity, traversal,
//!   referrer lookup, field access, change notification
//! - **[`DomainItem`] / [`domain_object!`]**: registry-constrained
//!   specializations enforcing a valid template-to-type binding at
//!   construction
//! - **[`Resolver`]**: the explicit context handle carrying registry,
//!   store and link index — no process-wide singletons
//! - **[`FixedPath`]**: well-known singleton locations resolved by id with
//!   path verification and fallback
//! - **[`validate_structure`]**: subtree conformance checking that reports
//!   violations as data, never as errors
//!
//! Data flows one direction: raw store → registry (resolve) → typed
//! wrapper → consumers. Nothing is cached across calls; every lookup sees
//! the store fresh.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use arbor_model::{domain_object, Resolver, TypeRegistry, TypedItem};
//! use arbor_store::mem::{ItemSpec, MemoryLinkIndex, MemoryStore};
//! use arbor_types::{ItemPath, TemplateId};
//!
//! const ARTICLE: TemplateId = TemplateId::from_u128(0xA1);
//!
//! domain_object! {
//!     struct Article
//! }
//!
//! let registry = TypeRegistry::builder().register::<Article>(ARTICLE).build()?;
//!
//! let store = MemoryStore::new();
//! let root = store.insert(ItemSpec::new("arbor", TemplateId::new()))?;
//! store.insert(ItemSpec::new("welcome", ARTICLE).under(root))?;
//!
//! let resolver = Resolver::new(
//!     Arc::new(registry),
//!     Arc::new(store.clone()),
//!     Arc::new(MemoryLinkIndex::new()),
//! );
//!
//! let root = resolver.item_by_path(&ItemPath::new("/arbor")).expect("root resolves");
//! let articles = root.item().children_of_type::<Article>().expect("one article");
//! assert_eq!(articles.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod fields;
mod fixed;
mod item;
mod registry;
mod resolver;
pub mod settings;
mod structure;
mod typed;

pub use error::{ModelError, Result};
pub use fields::{FieldRef, LinkValue};
pub use fixed::FixedPath;
pub use item::{FieldObserver, Item};
pub use registry::{TypeDescriptor, TypeRegistry, TypeRegistryBuilder};
pub use resolver::Resolver;
pub use settings::ExpirySettings;
pub use structure::{validate_structure, Expected, ExpectedChild};
pub use typed::{DomainItem, TypedItem};
