//! Resolved/unresolved outcome of matching a free-text value against a
//! directory.
//!
//! Callers must handle both arms: an unresolved app name still keys a safety
//! record (an orphan), and an unresolved data-type label is displayed verbatim
//! without an icon.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolution<T> {
    /// The value matched a directory entry.
    Resolved(T),
    /// No directory entry matched; carries the raw input.
    Unresolved(String),
}

impl<T> Resolution<T> {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[must_use]
    pub const fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved(_) => None,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Resolved(value) => Resolution::Resolved(f(value)),
            Self::Unresolved(raw) => Resolution::Unresolved(raw),
        }
    }
}

impl Resolution<String> {
    /// The resolved key, or the raw input when unresolved.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Resolved(key) | Self::Unresolved(key) => key,
        }
    }

    #[must_use]
    pub fn into_key(self) -> String {
        match self {
            Self::Resolved(key) | Self::Unresolved(key) => key,
        }
    }
}
