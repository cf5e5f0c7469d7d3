//! The catalog: every loaded table, owned in one place.
//!
//! [`Catalog::load`] fetches all five sources concurrently and returns only
//! once each has finished or failed, so readers never see a record that has
//! the shared flags folded in but not the collected ones. A failed source is
//! logged and leaves its table empty.

use std::path::Path;

use dss_config::SourcesConfig;
use dss_core::Resolution;
use dss_core::entities::{AppEntry, DataTypeEntry, RelationIcon};
use dss_core::enums::{FlagKind, SourceKind};
use dss_core::errors::CoreError;
use dss_core::paging::PageCursor;
use dss_core::responses::{AppPage, SafetySheet};
use dss_sources::{Location, SourceClient, SourceError, TableRow};
use serde::Serialize;

use crate::builder::build_sheet;
use crate::directory::{AppDirectory, DatatypeDirectory, RelationIcons};
use crate::matcher::{DatatypeMatch, match_datatype_key};
use crate::reconcile::{FoldSummary, fold_rows};
use crate::record::SafetyTable;

// ── Load report ────────────────────────────────────────────────────

/// Outcome of loading one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Entries (directory keys or table rows) read from the source.
    Loaded { entries: usize },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    pub source: SourceKind,
    pub location: String,
    #[serde(flatten)]
    pub outcome: LoadOutcome,
}

/// Per-source outcomes of [`Catalog::load`], in [`SourceKind::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub sources: Vec<SourceStatus>,
}

impl LoadReport {
    /// True when every source loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sources
            .iter()
            .all(|status| matches!(status.outcome, LoadOutcome::Loaded { .. }))
    }

    pub fn failed(&self) -> impl Iterator<Item = &SourceStatus> {
        self.sources
            .iter()
            .filter(|status| matches!(status.outcome, LoadOutcome::Failed { .. }))
    }

    fn settle<T>(
        &mut self,
        source: SourceKind,
        location: &Location,
        result: Result<Vec<T>, SourceError>,
    ) -> Vec<T> {
        let (outcome, items) = match result {
            Ok(items) => (
                LoadOutcome::Loaded {
                    entries: items.len(),
                },
                items,
            ),
            Err(error) => {
                tracing::warn!(
                    %source,
                    %location,
                    %error,
                    "failed to load source; continuing with an empty table"
                );
                (
                    LoadOutcome::Failed {
                        error: error.to_string(),
                    },
                    Vec::new(),
                )
            }
        };
        self.sources.push(SourceStatus {
            source,
            location: location.to_string(),
            outcome,
        });
        items
    }
}

// ── Catalog ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    apps: AppDirectory,
    relations: RelationIcons,
    datatypes: DatatypeDirectory,
    safety: SafetyTable,
}

impl Catalog {
    /// Build a catalog from already-decoded directories, with no safety data.
    /// Fold the exports in with [`Self::fold_rows`].
    #[must_use]
    pub fn from_parts(
        apps: Vec<AppEntry>,
        relations: Vec<RelationIcon>,
        datatypes: Vec<DataTypeEntry>,
    ) -> Self {
        Self {
            apps: AppDirectory::new(apps),
            relations: RelationIcons::new(relations),
            datatypes: DatatypeDirectory::new(datatypes),
            safety: SafetyTable::new(),
        }
    }

    /// Load every source and fold both exports.
    pub async fn load(
        client: &SourceClient,
        sources: &SourcesConfig,
        project_root: &Path,
    ) -> (Self, LoadReport) {
        let locate = |kind| Location::parse(&sources.locate(kind, project_root));
        let apps_at = locate(SourceKind::Apps);
        let arrows_at = locate(SourceKind::Arrows);
        let datatypes_at = locate(SourceKind::Datatypes);
        let shared_at = locate(SourceKind::SharedCsv);
        let collected_at = locate(SourceKind::CollectedCsv);

        let (apps, relations, datatypes, shared, collected) = tokio::join!(
            client.load_apps(&apps_at),
            client.load_relations(&arrows_at),
            client.load_datatypes(&datatypes_at),
            client.load_table(&shared_at),
            client.load_table(&collected_at),
        );

        let mut report = LoadReport::default();
        let apps = report.settle(SourceKind::Apps, &apps_at, apps);
        let relations = report.settle(SourceKind::Arrows, &arrows_at, relations);
        let datatypes = report.settle(SourceKind::Datatypes, &datatypes_at, datatypes);
        let shared = report.settle(SourceKind::SharedCsv, &shared_at, shared);
        let collected = report.settle(SourceKind::CollectedCsv, &collected_at, collected);

        let mut catalog = Self::from_parts(apps, relations, datatypes);
        catalog.fold_rows(&shared, FlagKind::Shared);
        catalog.fold_rows(&collected, FlagKind::Collected);

        tracing::debug!(
            apps = catalog.apps.len(),
            datatypes = catalog.datatypes.len(),
            records = catalog.safety.len(),
            orphans = catalog.safety.orphans().len(),
            "catalog loaded"
        );
        (catalog, report)
    }

    /// Fold one export into the safety table.
    pub fn fold_rows(&mut self, rows: &[TableRow], kind: FlagKind) -> FoldSummary {
        let summary = fold_rows(&mut self.safety, &self.apps, rows, kind);
        tracing::debug!(
            %kind,
            rows = summary.rows,
            skipped = summary.skipped,
            orphaned = summary.orphaned,
            flags = summary.flags,
            "export folded"
        );
        summary
    }

    /// Apps in directory order.
    #[must_use]
    pub fn apps(&self) -> &[AppEntry] {
        self.apps.entries()
    }

    #[must_use]
    pub fn app(&self, name: &str) -> Option<&AppEntry> {
        self.apps.get(name)
    }

    /// Resolve a free-text app name the same way export rows are resolved.
    #[must_use]
    pub fn resolve_app(&self, raw: &str) -> Resolution<String> {
        self.apps.resolve(raw)
    }

    /// Cursor over the app list, on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `page_size` is zero.
    pub fn cursor(&self, page_size: usize) -> Result<PageCursor, CoreError> {
        PageCursor::new(self.apps.len(), page_size)
    }

    /// Apps on the cursor's page.
    #[must_use]
    pub fn page(&self, cursor: PageCursor) -> AppPage {
        AppPage {
            page: cursor.index(),
            total_pages: cursor.total_pages(),
            apps: self
                .apps
                .entries()
                .get(cursor.range())
                .map(<[AppEntry]>::to_vec)
                .unwrap_or_default(),
        }
    }

    /// Detail view for a directory app key. A key outside the directory
    /// gets an empty icon.
    #[must_use]
    pub fn sheet(&self, app: &str) -> SafetySheet {
        let entry = self.apps.get(app).cloned().unwrap_or_else(|| AppEntry {
            name: app.to_string(),
            icon: String::new(),
        });
        build_sheet(
            &entry,
            self.safety.record(app),
            &self.datatypes,
            &self.relations,
        )
    }

    /// Run the datatype matcher for one label.
    #[must_use]
    pub fn match_datatype(&self, label: &str) -> Resolution<DatatypeMatch> {
        match_datatype_key(label, &self.datatypes)
            .map_or_else(|| Resolution::Unresolved(label.to_string()), Resolution::Resolved)
    }

    /// Export app names that matched no directory entry.
    #[must_use]
    pub fn orphans(&self) -> &[String] {
        self.safety.orphans()
    }

    #[must_use]
    pub const fn safety(&self) -> &SafetyTable {
        &self.safety
    }
}
