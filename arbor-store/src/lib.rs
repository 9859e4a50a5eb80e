//! External content-store boundary for Arbor.
//!
//! The item layer never owns storage. This crate defines the contract a
//! host store must implement for the model layer to consume:
//! - [`RawItem`] / [`RawField`] — one generic, template-typed content node
//!   and its fields
//! - [`ContentStore`] — fetch by id or path
//! - [`LinkIndex`] — inbound-reference lookup
//!
//! Absence is the only failure these traits can express: a host that hits
//! I/O or permission trouble surfaces it on its own side of the boundary,
//! the item layer only ever observes "present" or "absent".
//!
//! [`mem`] provides the in-memory reference adapter used by hosts in tests.

mod error;
pub mod mem;
mod raw;
mod store;

pub use error::{StoreError, StoreResult};
pub use raw::{ItemLink, RawField, RawItem};
pub use store::{ContentStore, LinkIndex};
