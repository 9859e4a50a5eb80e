//! Structural validation of a subtree against expected-child rules.
//!
//! Validation never fails: violations are diagnostic data, accumulated
//! across the whole subtree in one pass so a host can report every defect
//! at once.

use crate::{Item, TypedItem};
use arbor_types::TemplateId;
use tracing::debug;

/// What an expected child must be.
#[derive(Debug, Clone, Copy)]
pub enum Expected {
    /// Built from this exact template.
    Template(TemplateId),
    /// Resolving to a wrapper type that declares this capability tag.
    Capability(TemplateId),
}

/// One expected named child, with its own expected children beneath it.
#[derive(Debug, Clone)]
pub struct ExpectedChild {
    name: String,
    expected: Expected,
    children: Vec<ExpectedChild>,
}

impl ExpectedChild {
    /// Declares an expected child.
    pub fn new(name: impl Into<String>, expected: Expected) -> Self {
        Self {
            name: name.into(),
            expected,
            children: Vec::new(),
        }
    }

    /// Nests an expected child beneath this one.
    #[must_use]
    pub fn with_child(mut self, child: ExpectedChild) -> Self {
        self.children.push(child);
        self
    }
}

/// Checks that each expected named child of `root` exists and conforms,
/// recursively. Child rules compose: a parent's violations include every
/// violation surfaced beneath its children. Recursion continues under a
/// present child even when its type is wrong, so one pass reports every
/// defect. Absent when the subtree is clean.
#[must_use]
pub fn validate_structure(root: &dyn TypedItem, rules: &[ExpectedChild]) -> Option<Vec<String>> {
    let mut violations = Vec::new();
    check_children(root.item(), rules, &mut violations);
    if violations.is_empty() {
        None
    } else {
        debug!(count = violations.len(), root = %root.item().path(), "structure violations");
        Some(violations)
    }
}

fn check_children(parent: &Item, rules: &[ExpectedChild], out: &mut Vec<String>) {
    for rule in rules {
        match parent.child(&rule.name) {
            None => out.push(format!(
                "expected child '{}' under {} was not found",
                rule.name,
                parent.path()
            )),
            Some(child) => {
                if let Some(message) = type_violation(child.as_ref(), rule) {
                    out.push(message);
                }
                check_children(child.item(), &rule.children, out);
            }
        }
    }
}

fn type_violation(child: &dyn TypedItem, rule: &ExpectedChild) -> Option<String> {
    let item = child.item();
    let registry = item.resolver().registry();
    match rule.expected {
        Expected::Template(expected) => {
            let actual = item.template_id();
            (actual != expected).then(|| {
                format!(
                    "child '{}' at {} is {}, expected {}",
                    item.name(),
                    item.path(),
                    template_name(registry, actual),
                    template_name(registry, expected),
                )
            })
        }
        Expected::Capability(capability) => (!registry
            .wrapper_has_capability(child, capability))
        .then(|| {
            format!(
                "child '{}' at {} is {}, which does not declare capability {}",
                item.name(),
                item.path(),
                template_name(registry, item.template_id()),
                capability,
            )
        }),
    }
}

/// The registered type name for a template, or the bare id when unmapped.
fn template_name(registry: &crate::TypeRegistry, template_id: TemplateId) -> String {
    registry
        .primary(template_id)
        .map_or_else(|| template_id.to_string(), |d| d.type_name().to_string())
}
