//! Relation and flag-kind enums.
//!
//! `RelationKind` serializes with the same casing the arrows directory uses
//! for its keys (`Shared`, `Collected`, `Both`). `FlagKind` names which of the
//! two tabular exports a row came from and serializes as `snake_case`, as
//! does `SourceKind`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RelationKind
// ---------------------------------------------------------------------------

/// How a data type relates to an app: shared with third parties, collected by
/// the app, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Shared,
    Collected,
    Both,
}

impl RelationKind {
    pub const ALL: [Self; 3] = [Self::Shared, Self::Collected, Self::Both];

    /// Return the key used for this relation in the arrows directory.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "Shared",
            Self::Collected => "Collected",
            Self::Both => "Both",
        }
    }

    /// Parse an arrows directory key. Matching is exact, as authored.
    #[must_use]
    pub fn from_source_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FlagKind
// ---------------------------------------------------------------------------

/// Which tabular export a row belongs to, and therefore which flag it sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Shared,
    Collected,
}

impl FlagKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Collected => "collected",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

/// The five datasets loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Apps,
    Arrows,
    Datatypes,
    SharedCsv,
    CollectedCsv,
}

impl SourceKind {
    pub const ALL: [Self; 5] = [
        Self::Apps,
        Self::Arrows,
        Self::Datatypes,
        Self::SharedCsv,
        Self::CollectedCsv,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Arrows => "arrows",
            Self::Datatypes => "datatypes",
            Self::SharedCsv => "shared_csv",
            Self::CollectedCsv => "collected_csv",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FlagKind> for SourceKind {
    fn from(kind: FlagKind) -> Self {
        match kind {
            FlagKind::Shared => Self::SharedCsv,
            FlagKind::Collected => Self::CollectedCsv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_kind_parses_source_keys_exactly() {
        assert_eq!(RelationKind::from_source_key("Shared"), Some(RelationKind::Shared));
        assert_eq!(
            RelationKind::from_source_key("Collected"),
            Some(RelationKind::Collected)
        );
        assert_eq!(RelationKind::from_source_key("Both"), Some(RelationKind::Both));
        assert_eq!(RelationKind::from_source_key("both"), None);
        assert_eq!(RelationKind::from_source_key("Neither"), None);
    }

    #[test]
    fn relation_kind_serializes_as_source_key() {
        let json = serde_json::to_string(&RelationKind::Both).unwrap();
        assert_eq!(json, "\"Both\"");
    }

    #[test]
    fn flag_kind_display_is_snake_case() {
        assert_eq!(FlagKind::Shared.to_string(), "shared");
        assert_eq!(
            serde_json::to_string(&FlagKind::Collected).unwrap(),
            "\"collected\""
        );
    }
}
