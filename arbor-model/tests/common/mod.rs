#![allow(dead_code)]

//! Shared fixtures: a small registry of domain types over the in-memory
//! store adapter.

use arbor_model::{domain_object, Resolver, TypeRegistry, TypedItem};
use arbor_store::mem::{MemoryLinkIndex, MemoryStore};
use arbor_types::TemplateId;
use std::any::{Any, TypeId};
use std::sync::Arc;

pub const FOLDER: TemplateId = TemplateId::from_u128(0x01);
pub const ARTICLE: TemplateId = TemplateId::from_u128(0x02);
pub const BANNER: TemplateId = TemplateId::from_u128(0x03);
/// A template nothing registers for.
pub const UNMAPPED: TemplateId = TemplateId::from_u128(0x0F);
/// Contributing-template tag declared by [`Article`].
pub const SEARCHABLE: TemplateId = TemplateId::from_u128(0xA0);

domain_object! {
    pub struct Folder
}

domain_object! {
    pub struct Article
}

domain_object! {
    pub struct Banner
}

pub struct Fixture {
    pub store: MemoryStore,
    pub links: MemoryLinkIndex,
    pub resolver: Resolver,
}

/// Registry with the three domain types; `Article` declares `SEARCHABLE`.
pub fn fixture() -> Fixture {
    let registry = TypeRegistry::builder()
        .register::<Folder>(FOLDER)
        .register::<Article>(ARTICLE)
        .register::<Banner>(BANNER)
        .capability::<Article>(SEARCHABLE)
        .build()
        .expect("registry builds");

    let store = MemoryStore::new();
    let links = MemoryLinkIndex::new();
    let resolver = Resolver::new(
        Arc::new(registry),
        Arc::new(store.clone()),
        Arc::new(links.clone()),
    );
    Fixture {
        store,
        links,
        resolver,
    }
}

/// Whether a resolved wrapper's concrete type is exactly `T`.
pub fn is_wrapper<T: TypedItem>(wrapper: &dyn TypedItem) -> bool {
    let any: &dyn Any = wrapper;
    any.type_id() == TypeId::of::<T>()
}
