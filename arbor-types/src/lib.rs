//! Core type definitions for Arbor.
//!
//! This crate defines the fundamental, store-agnostic types used throughout
//! the item layer:
//! - Item, template and field identifiers (UUID v4)
//! - Version numbers and language codes
//! - Content-tree paths with case-insensitive comparison
//! - The identity triple that governs wrapper equality
//!
//! Everything that knows about templates-as-types, traversal or fields
//! belongs in `arbor-model`, not here.

mod identity;
mod ids;
mod path;

pub use identity::{ItemIdentity, Language, Version};
pub use ids::{FieldId, ItemId, TemplateId};
pub use path::ItemPath;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid item path: {0}")]
    InvalidPath(String),
}
