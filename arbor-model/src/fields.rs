//! Typed field access, change notification, and link resolution.
//!
//! Field reads fall back per type when the field is absent: text reads as
//! `""`, booleans as `false`, numerics as `None`. The fallbacks live here,
//! once, so every domain property inherits the same policy.

use crate::Item;
use arbor_store::RawField;
use arbor_types::{FieldId, ItemId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The payload a link field stores, as tagged JSON.
///
/// `{"kind":"internal","target":"…"}` and `{"kind":"media","target":"…"}`
/// name an item in the store; `{"kind":"external","url":"…"}` carries the
/// URL verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkValue {
    /// A link to another content item.
    Internal { target: ItemId },
    /// A link to a media asset.
    Media { target: ItemId },
    /// A link to an external URL, passed through untouched.
    External { url: String },
}

impl LinkValue {
    /// Encodes the payload for storage in a raw field.
    #[must_use]
    pub fn to_field_value(&self) -> String {
        serde_json::to_string(self).expect("link payload serializes")
    }
}

/// A field's id paired with its name, for id-first/name-fallback lookup.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef {
    pub id: FieldId,
    pub name: &'static str,
}

impl FieldRef {
    /// Creates a field reference, usable in constants.
    #[must_use]
    pub const fn new(id: FieldId, name: &'static str) -> Self {
        Self { id, name }
    }
}

impl Item {
    // ── Field access ──────────────────────────────────────────────

    /// Resolves a field by id first, falling back to lookup by name.
    /// Absent when neither resolves.
    #[must_use]
    pub fn field(&self, id: FieldId, name: &str) -> Option<Arc<dyn RawField>> {
        self.raw()
            .field_by_id(id)
            .or_else(|| self.raw().field_by_name(name))
    }

    /// The raw string value of a field; absent when the field is.
    #[must_use]
    pub fn field_value(&self, id: FieldId, name: &str) -> Option<String> {
        self.field(id, name).map(|field| field.value())
    }

    /// Reads a text field; `""` when absent.
    #[must_use]
    pub fn text(&self, field: FieldRef) -> String {
        self.field_value(field.id, field.name).unwrap_or_default()
    }

    /// Reads a boolean field; `false` when absent. "1" and "true"
    /// (ASCII-case-insensitive) are true, anything else is false.
    #[must_use]
    pub fn boolean(&self, field: FieldRef) -> bool {
        self.field_value(field.id, field.name)
            .is_some_and(|value| {
                let value = value.trim();
                value == "1" || value.eq_ignore_ascii_case("true")
            })
    }

    /// Reads an integer field; `None` when absent or unparseable.
    #[must_use]
    pub fn integer(&self, field: FieldRef) -> Option<i64> {
        self.field_value(field.id, field.name)?.trim().parse().ok()
    }

    // ── Change notification ───────────────────────────────────────

    /// Registers an observer fired before every field mutation, with the
    /// field's name. Observers run synchronously in registration order;
    /// registering from inside an observer is not supported.
    pub fn on_changing(&self, observer: impl Fn(&str) + Send + Sync + 'static) {
        self.changing
            .lock()
            .expect("observer lock poisoned")
            .push(Box::new(observer));
    }

    /// Registers an observer fired after every field mutation, with the
    /// field's name.
    pub fn on_changed(&self, observer: impl Fn(&str) + Send + Sync + 'static) {
        self.changed
            .lock()
            .expect("observer lock poisoned")
            .push(Box::new(observer));
    }

    /// Sets a field value under the notification contract.
    ///
    /// The new value is compared with the current one by value equality:
    /// equal means no mutation and no notifications. On a real change,
    /// every changing-observer fires, then the mutation, then every
    /// changed-observer, strictly in that order. A field that resolves to
    /// nothing is a no-op. Returns whether a mutation happened.
    pub fn set_field(&self, id: FieldId, name: &str, new_value: &str) -> bool {
        let Some(field) = self.field(id, name) else {
            return false;
        };
        if field.value() == new_value {
            return false;
        }
        let field_name = field.name();
        self.notify(&self.changing, &field_name);
        field.set_value(new_value);
        self.notify(&self.changed, &field_name);
        true
    }

    /// Sets a text field under the notification contract.
    pub fn set_text(&self, field: FieldRef, value: &str) -> bool {
        self.set_field(field.id, field.name, value)
    }

    /// Sets a boolean field, stored as "1"/"0".
    pub fn set_boolean(&self, field: FieldRef, value: bool) -> bool {
        self.set_field(field.id, field.name, if value { "1" } else { "0" })
    }

    /// Sets an integer field, stored as decimal.
    pub fn set_integer(&self, field: FieldRef, value: i64) -> bool {
        self.set_field(field.id, field.name, &value.to_string())
    }

    fn notify(&self, list: &std::sync::Mutex<Vec<crate::FieldObserver>>, field_name: &str) {
        for observer in list.lock().expect("observer lock poisoned").iter() {
            observer(field_name);
        }
    }

    // ── Link resolution ───────────────────────────────────────────

    /// Resolves a link field to a URL.
    ///
    /// Internal and media links resolve through the store and registry to
    /// the target item's canonical URL, its content path. External
    /// links pass the raw URL through unchanged. An absent field, an
    /// unparseable payload or a missing target is an absent URL.
    #[must_use]
    pub fn link_url(&self, id: FieldId, name: &str) -> Option<String> {
        let value = self.field_value(id, name)?;
        match serde_json::from_str::<LinkValue>(&value).ok()? {
            LinkValue::Internal { target } | LinkValue::Media { target } => {
                let resolved = self.resolver().item_by_id(target)?;
                Some(resolved.item().path().to_string())
            }
            LinkValue::External { url } => Some(url),
        }
    }
}
