//! In-memory directories built once from the loaded JSON sources.

use std::collections::HashMap;

use dss_core::entities::{AppEntry, DataTypeEntry, RelationIcon};
use dss_core::enums::RelationKind;
use dss_core::{Resolution, normalize};

// ---------------------------------------------------------------------------
// AppDirectory
// ---------------------------------------------------------------------------

/// The app directory in authored order, with normalized keys for matching
/// free-text names from the tabular exports.
#[derive(Debug, Clone, Default)]
pub struct AppDirectory {
    entries: Vec<AppEntry>,
    normalized: Vec<String>,
}

impl AppDirectory {
    #[must_use]
    pub fn new(entries: Vec<AppEntry>) -> Self {
        let normalized = entries.iter().map(|entry| normalize(&entry.name)).collect();
        Self {
            entries,
            normalized,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose key equals `name` exactly.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Resolve a free-text app name to a directory key.
    ///
    /// The first entry (in directory order) whose normalized key equals the
    /// normalized `raw` wins. Unmatched names come back as
    /// [`Resolution::Unresolved`] carrying `raw` unchanged.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Resolution<String> {
        let wanted = normalize(raw);
        self.normalized
            .iter()
            .position(|key| *key == wanted)
            .map_or_else(
                || Resolution::Unresolved(raw.to_string()),
                |index| Resolution::Resolved(self.entries[index].name.clone()),
            )
    }
}

// ---------------------------------------------------------------------------
// DatatypeDirectory
// ---------------------------------------------------------------------------

/// The datatype directory plus a normalized-key index used by the matcher.
///
/// When two directory keys normalize to the same string, the index keeps the
/// position of the first and points at the later key.
#[derive(Debug, Clone, Default)]
pub struct DatatypeDirectory {
    entries: Vec<DataTypeEntry>,
    by_key: HashMap<String, usize>,
    index: Vec<(String, String)>,
    index_pos: HashMap<String, usize>,
}

impl DatatypeDirectory {
    #[must_use]
    pub fn new(entries: Vec<DataTypeEntry>) -> Self {
        let mut directory = Self {
            entries: Vec::with_capacity(entries.len()),
            ..Self::default()
        };
        for entry in entries {
            directory.insert(entry);
        }
        directory
    }

    fn insert(&mut self, entry: DataTypeEntry) {
        let normalized = normalize(&entry.key);
        if let Some(&pos) = self.index_pos.get(&normalized) {
            tracing::debug!(
                key = %entry.key,
                previous = %self.index[pos].1,
                "datatype keys collide after normalization; later key wins"
            );
            self.index[pos].1.clone_from(&entry.key);
        } else {
            self.index_pos.insert(normalized.clone(), self.index.len());
            self.index.push((normalized, entry.key.clone()));
        }

        self.by_key.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[DataTypeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for an authored (canonical) key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DataTypeEntry> {
        self.by_key.get(key).map(|&index| &self.entries[index])
    }

    /// Canonical key for a normalized key.
    #[must_use]
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.index_pos
            .get(normalized)
            .map(|&pos| self.index[pos].1.as_str())
    }

    /// `(normalized, canonical)` pairs in first-insertion order.
    pub fn index(&self) -> impl Iterator<Item = (&str, &str)> {
        self.index.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }
}

// ---------------------------------------------------------------------------
// RelationIcons
// ---------------------------------------------------------------------------

/// Configured icon per relation kind. Any kind may be missing.
#[derive(Debug, Clone, Default)]
pub struct RelationIcons {
    icons: Vec<RelationIcon>,
}

impl RelationIcons {
    #[must_use]
    pub fn new(icons: Vec<RelationIcon>) -> Self {
        let mut deduped: Vec<RelationIcon> = Vec::with_capacity(icons.len());
        for icon in icons {
            if let Some(existing) = deduped.iter_mut().find(|i| i.kind == icon.kind) {
                *existing = icon;
            } else {
                deduped.push(icon);
            }
        }
        Self { icons: deduped }
    }

    #[must_use]
    pub fn get(&self, kind: RelationKind) -> Option<&RelationIcon> {
        self.icons.iter().find(|icon| icon.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
