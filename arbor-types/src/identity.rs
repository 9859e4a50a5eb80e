//! Version numbers, language codes, and the wrapper identity triple.
//!
//! Two wrappers over the same store are considered the same object when
//! their (id, version, language) triples are equal, never by comparing
//! the in-memory handles they hold. [`ItemIdentity`] is that triple.

use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based item version number.
///
/// Every language of an item carries its own version sequence; version 1 is
/// the first stored revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u32);

impl Version {
    /// The first stored revision.
    pub const FIRST: Self = Self(1);

    /// Creates a version from its number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the version number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// The language a stored item revision belongs to ("en", "da", ...).
///
/// Comparison is exact: "en" and "en-GB" are distinct revisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Creates a language from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the language code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// The identity triple: what makes two wrapped items "the same".
///
/// Wrappers constructed from separately-fetched raw items with identical
/// triples are equal and hash identically, regardless of whether they share
/// an in-memory node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemIdentity {
    /// The item's store identifier.
    pub id: ItemId,
    /// The revision this wrapper observes.
    pub version: Version,
    /// The language this wrapper observes.
    pub language: Language,
}

impl ItemIdentity {
    /// Creates an identity triple.
    #[must_use]
    pub fn new(id: ItemId, version: Version, language: Language) -> Self {
        Self {
            id,
            version,
            language,
        }
    }
}

impl fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.id, self.version, self.language)
    }
}
