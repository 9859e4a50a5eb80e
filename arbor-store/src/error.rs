//! Error types for the store boundary.

use arbor_types::ItemId;
use thiserror::Error;

/// Result type for store-adapter operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store adapters while building or mutating their tree.
///
/// Read paths never produce these; lookups return absence instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An item with this ID already exists.
    #[error("item already exists: {0}")]
    DuplicateItem(ItemId),

    /// The requested parent is not in the store.
    #[error("parent item not found: {0}")]
    ParentNotFound(ItemId),
}
