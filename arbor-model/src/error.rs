//! Error types for the item engine.
//!
//! Everything here signals a configuration defect: a template registered
//! twice, a domain type constructed over the wrong template. Absent items,
//! absent fields and absent traversal results are never errors; they are
//! `None` at the call site.

use arbor_types::TemplateId;
use thiserror::Error;

/// Result type for item-engine operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Configuration defects raised by the registry and by checked
/// domain-object construction.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A domain type was constructed over a template with no primary mapping.
    #[error("template {template_id} has no registered wrapper type")]
    TemplateNotRegistered { template_id: TemplateId },

    /// A domain type was constructed over a template mapped to another type.
    #[error("template {template_id} is bound to {registered}, not {requested}")]
    TemplateMismatch {
        template_id: TemplateId,
        registered: &'static str,
        requested: &'static str,
    },

    /// Two registrations claimed the same template.
    #[error("template {template_id} is already mapped to {type_name}")]
    DuplicateTemplate {
        template_id: TemplateId,
        type_name: &'static str,
    },

    /// One concrete type was registered as the primary mapping twice.
    #[error("{type_name} is already the primary mapping for template {template_id}")]
    DuplicatePrimaryType {
        type_name: &'static str,
        template_id: TemplateId,
    },

    /// A capability tag was declared for a type with no primary mapping.
    #[error("capability {capability} declared for unregistered type {type_name}")]
    CapabilityForUnregisteredType {
        capability: TemplateId,
        type_name: &'static str,
    },
}
