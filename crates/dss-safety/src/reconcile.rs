//! Folding tabular export rows into the safety table.
//!
//! Ingestion is lenient: rows without an app name are dropped without a
//! log line, unknown app names become orphan records, and any cell other
//! than `Y`/`y` is "does not apply". Cells are text, so `true` is not `Y`.
//!
//! The app-name columns are recognized by their exact header, both when
//! reading the name and when skipping them as data columns. Data-type labels
//! are the trimmed header.

use dss_core::Resolution;
use dss_core::enums::FlagKind;
use dss_sources::TableRow;

use crate::directory::AppDirectory;
use crate::record::SafetyTable;

/// Column headers that hold the app name, tried in this order.
pub const APP_NAME_COLUMNS: [&str; 2] = ["Applications", "App Name"];

/// Outcome counters for one fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldSummary {
    /// Rows that carried an app name.
    pub rows: usize,
    /// Rows dropped for a missing or blank app name.
    pub skipped: usize,
    /// Rows whose app name matched no directory entry.
    pub orphaned: usize,
    /// Flags set (including ones that were already set).
    pub flags: usize,
}

/// Fold every row of one export into `table`, setting the `kind` flag.
pub fn fold_rows(
    table: &mut SafetyTable,
    apps: &AppDirectory,
    rows: &[TableRow],
    kind: FlagKind,
) -> FoldSummary {
    let mut summary = FoldSummary::default();

    for row in rows {
        let Some(raw_name) = app_name(row) else {
            summary.skipped += 1;
            continue;
        };
        summary.rows += 1;

        let app_key = match apps.resolve(raw_name) {
            Resolution::Resolved(key) => key,
            Resolution::Unresolved(raw) => {
                tracing::debug!(app = %raw, %kind, "no directory entry for app; keeping orphan record");
                summary.orphaned += 1;
                table.note_orphan(&raw);
                raw
            }
        };

        for (header, cell) in row.cells() {
            if APP_NAME_COLUMNS.contains(&header) {
                continue;
            }
            let label = header.trim();
            if label.is_empty() || !is_affirmative(cell) {
                continue;
            }
            table.set(&app_key, label, kind);
            summary.flags += 1;
        }
    }

    summary
}

/// Trimmed app name from the first non-blank name column, matched by exact
/// header.
#[must_use]
pub fn app_name(row: &TableRow) -> Option<&str> {
    APP_NAME_COLUMNS
        .iter()
        .filter_map(|column| row.get(column))
        .map(str::trim)
        .find(|name| !name.is_empty())
}

/// `Y` in either case. Anything else, including `true` and `Yes`, does not
/// apply.
#[must_use]
pub fn is_affirmative(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use dss_core::entities::{AppEntry, SafetyFlag};

    use super::*;

    fn apps() -> AppDirectory {
        AppDirectory::new(vec![AppEntry {
            name: "Acme Chat".into(),
            icon: "a.png".into(),
        }])
    }

    #[rstest]
    #[case("Y", true)]
    #[case("y", true)]
    #[case("true", false)]
    #[case("TRUE", false)]
    #[case("N", false)]
    #[case("n", false)]
    #[case("", false)]
    #[case("Yes", false)]
    #[case(" Y", false)]
    fn affirmative_cells(#[case] cell: &str, #[case] expected: bool) {
        assert_eq!(is_affirmative(cell), expected);
    }

    #[test]
    fn app_name_prefers_applications_then_app_name() {
        let both = TableRow::new([("App Name", "Second"), ("Applications", " First ")]);
        assert_eq!(app_name(&both), Some("First"));

        let fallback = TableRow::new([("Applications", "  "), ("App Name", "Second")]);
        assert_eq!(app_name(&fallback), Some("Second"));

        let none = TableRow::new([("Location", "Y")]);
        assert_eq!(app_name(&none), None);

        let padded_header = TableRow::new([(" Applications ", "Acme Chat")]);
        assert_eq!(app_name(&padded_header), None);
    }

    #[test]
    fn true_cells_set_no_flag() {
        let mut table = SafetyTable::new();
        let rows = vec![TableRow::new([
            ("Applications", "Acme Chat"),
            ("Location", "true"),
            ("Contacts", "Y"),
        ])];

        let summary = fold_rows(&mut table, &apps(), &rows, FlagKind::Shared);

        assert_eq!(summary.flags, 1);
        let record = table.record("Acme Chat").expect("record for Contacts");
        assert_eq!(record.get("Location"), None);
        assert!(record.get("Contacts").is_some_and(|f| f.shared));
    }

    #[test]
    fn padded_name_header_is_a_data_column() {
        let mut table = SafetyTable::new();
        let rows = vec![TableRow::new([
            ("Applications", "Acme Chat"),
            (" App Name ", "y"),
        ])];

        fold_rows(&mut table, &apps(), &rows, FlagKind::Collected);

        let record = table.record("Acme Chat").expect("record");
        assert!(record.get("App Name").is_some_and(|f| f.collected));
    }

    #[test]
    fn rows_without_app_name_touch_nothing() {
        let mut table = SafetyTable::new();
        let rows = vec![
            TableRow::new([("Applications", ""), ("Location", "Y")]),
            TableRow::new([("Location", "Y")]),
        ];

        let summary = fold_rows(&mut table, &apps(), &rows, FlagKind::Shared);

        assert_eq!(summary.skipped, 2);
        assert!(table.is_empty());
        assert!(table.orphans().is_empty());
    }

    #[test]
    fn resolved_and_orphan_rows() {
        let mut table = SafetyTable::new();
        let rows = vec![
            TableRow::new([("Applications", "ACME-Chat"), ("Location", "Y"), ("Contacts", "N")]),
            TableRow::new([("Applications", "Ghost App"), ("Location", "y")]),
        ];

        let summary = fold_rows(&mut table, &apps(), &rows, FlagKind::Shared);

        assert_eq!(
            summary,
            FoldSummary {
                rows: 2,
                skipped: 0,
                orphaned: 1,
                flags: 2
            }
        );
        let acme = table.record("Acme Chat").expect("resolved record");
        assert_eq!(
            acme.get("Location"),
            Some(SafetyFlag {
                shared: true,
                collected: false
            })
        );
        assert_eq!(acme.get("Contacts"), None);
        assert!(table.record("Ghost App").is_some());
        assert_eq!(table.orphans(), ["Ghost App"]);
    }

    #[test]
    fn headers_are_trimmed_and_blank_headers_skipped() {
        let mut table = SafetyTable::new();
        let rows = vec![TableRow::new([
            ("Applications", "Acme Chat"),
            ("  Location ", "Y"),
            ("   ", "Y"),
        ])];

        fold_rows(&mut table, &apps(), &rows, FlagKind::Collected);

        let record = table.record("Acme Chat").unwrap();
        assert_eq!(record.len(), 1);
        assert!(record.get("Location").is_some_and(|f| f.collected));
    }

    #[test]
    fn later_rows_never_clear_flags() {
        let mut table = SafetyTable::new();
        let rows = vec![
            TableRow::new([("Applications", "Acme Chat"), ("Location", "Y")]),
            TableRow::new([("Applications", "acme chat"), ("Location", "N")]),
            TableRow::new([("Applications", "ACME CHAT"), ("Location", "")]),
        ];

        fold_rows(&mut table, &apps(), &rows, FlagKind::Shared);

        let flag = table.record("Acme Chat").and_then(|r| r.get("Location"));
        assert!(flag.is_some_and(|f| f.shared));
    }
}
