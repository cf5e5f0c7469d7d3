//! Directory entities and per-datatype safety flags.

use serde::{Deserialize, Serialize};

use crate::enums::{FlagKind, RelationKind};

/// An application from the app directory. Identity is the exact `name` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub name: String,
    pub icon: String,
}

/// A data type from the datatype directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeEntry {
    /// Directory key as authored (not normalized).
    pub key: String,
    /// Human-readable label. May be empty in the source file.
    pub name: String,
    pub icon: String,
}

impl DataTypeEntry {
    /// Label to show for this data type, falling back to the directory key.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }
}

/// Icon for a relation kind from the arrows directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationIcon {
    pub kind: RelationKind,
    pub icon: String,
}

/// Shared/collected flags for one (app, raw data-type label) pair.
///
/// Flags only ever move from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyFlag {
    pub shared: bool,
    pub collected: bool,
}

impl SafetyFlag {
    /// Set the flag for `kind`. Never clears.
    pub const fn set(&mut self, kind: FlagKind) {
        match kind {
            FlagKind::Shared => self.shared = true,
            FlagKind::Collected => self.collected = true,
        }
    }

    #[must_use]
    pub const fn is_set(self, kind: FlagKind) -> bool {
        match kind {
            FlagKind::Shared => self.shared,
            FlagKind::Collected => self.collected,
        }
    }

    /// True when at least one flag is set. Entries without any flag are not
    /// shown to the presentation layer.
    #[must_use]
    pub const fn any(self) -> bool {
        self.shared || self.collected
    }

    /// The relation these flags describe, or `None` when neither is set.
    #[must_use]
    pub const fn relation(self) -> Option<RelationKind> {
        match (self.shared, self.collected) {
            (true, true) => Some(RelationKind::Both),
            (true, false) => Some(RelationKind::Shared),
            (false, true) => Some(RelationKind::Collected),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_only_accumulate() {
        let mut flag = SafetyFlag::default();
        assert!(!flag.any());
        assert_eq!(flag.relation(), None);

        flag.set(FlagKind::Collected);
        assert_eq!(flag.relation(), Some(RelationKind::Collected));

        flag.set(FlagKind::Shared);
        flag.set(FlagKind::Collected);
        assert!(flag.is_set(FlagKind::Shared));
        assert!(flag.is_set(FlagKind::Collected));
        assert_eq!(flag.relation(), Some(RelationKind::Both));
    }

    #[test]
    fn display_name_falls_back_to_key() {
        let named = DataTypeEntry {
            key: "Location data".into(),
            name: "Location".into(),
            icon: "loc.png".into(),
        };
        let unnamed = DataTypeEntry {
            key: "Location data".into(),
            name: String::new(),
            icon: String::new(),
        };
        assert_eq!(named.display_name(), "Location");
        assert_eq!(unnamed.display_name(), "Location data");
    }
}
