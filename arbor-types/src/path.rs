//! Content-tree paths.
//!
//! A path names an item by its position in the tree ("/arbor/system/expiry").
//! Editors freely re-case segments when renaming, so equality and hashing
//! ignore ASCII case; the original casing is preserved for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A content-tree path.
///
/// Stored as given (minus any trailing slash); compared and hashed
/// ASCII-case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemPath(String);

impl ItemPath {
    /// Creates a path, stripping a trailing slash if present.
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        while path.len() > 1 && path.ends_with('/') {
            path.pop();
        }
        Self(path)
    }

    /// Parses a path, requiring it to be rooted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) when the
    /// input does not start with `/`.
    pub fn parse(path: &str) -> crate::Result<Self> {
        if !path.starts_with('/') {
            return Err(crate::Error::InvalidPath(format!(
                "path must be rooted: {path:?}"
            )));
        }
        Ok(Self::new(path))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last segment, the item's name position in the tree.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Returns the parent path, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let idx = self.0.rfind('/')?;
        if idx == 0 {
            // "/name" parents to the root itself only when there is one.
            return (self.0.len() > 1).then(|| Self("/".to_string()));
        }
        Some(Self(self.0[..idx].to_string()))
    }

    /// Appends a child segment.
    #[must_use]
    pub fn join(&self, name: &str) -> Self {
        if self.0 == "/" {
            Self(format!("/{name}"))
        } else {
            Self(format!("{}/{name}", self.0))
        }
    }
}

impl PartialEq for ItemPath {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ItemPath {}

impl Hash for ItemPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ItemPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
