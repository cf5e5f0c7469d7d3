//! Per-app safety records accumulated from the tabular exports.

use std::collections::HashMap;

use dss_core::entities::SafetyFlag;
use dss_core::enums::FlagKind;

/// Raw data-type label -> flags for one app, in first-seen label order.
///
/// Labels are stored as they appeared in the CSV header (trimmed, not
/// normalized).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSafetyRecord {
    entries: Vec<(String, SafetyFlag)>,
    positions: HashMap<String, usize>,
}

impl AppSafetyRecord {
    /// Set `kind` on `label`, creating the entry with both flags clear first.
    pub fn set(&mut self, label: &str, kind: FlagKind) {
        let index = match self.positions.get(label) {
            Some(&index) => index,
            None => {
                self.positions.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), SafetyFlag::default()));
                self.entries.len() - 1
            }
        };
        self.entries[index].1.set(kind);
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<SafetyFlag> {
        self.positions.get(label).map(|&index| self.entries[index].1)
    }

    /// `(label, flags)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SafetyFlag)> {
        self.entries.iter().map(|(label, flag)| (label.as_str(), *flag))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every app's record, keyed by resolved app name (or the raw CSV name for
/// rows that matched no directory entry).
#[derive(Debug, Clone, Default)]
pub struct SafetyTable {
    records: HashMap<String, AppSafetyRecord>,
    orphans: Vec<String>,
}

impl SafetyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `kind` on (`app`, `label`). Flags already set stay set.
    pub fn set(&mut self, app: &str, label: &str, kind: FlagKind) {
        self.records
            .entry(app.to_string())
            .or_default()
            .set(label, kind);
    }

    /// Remember an app key that did not resolve to the directory.
    pub fn note_orphan(&mut self, raw_name: &str) {
        if !self.orphans.iter().any(|name| name == raw_name) {
            self.orphans.push(raw_name.to_string());
        }
    }

    #[must_use]
    pub fn record(&self, app: &str) -> Option<&AppSafetyRecord> {
        self.records.get(app)
    }

    /// CSV app names that never matched a directory entry, in first-seen order.
    #[must_use]
    pub fn orphans(&self) -> &[String] {
        &self.orphans
    }

    /// Number of apps with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
