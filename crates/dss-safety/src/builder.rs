//! Turning an app's safety record into render-ready rows.

use dss_core::Resolution;
use dss_core::entities::{AppEntry, RelationIcon, SafetyFlag};
use dss_core::enums::RelationKind;
use dss_core::responses::{SafetyRow, SafetySheet};

use crate::directory::{DatatypeDirectory, RelationIcons};
use crate::matcher::match_datatype_key;
use crate::record::AppSafetyRecord;

/// Build the detail view for `app`.
///
/// Labels with neither flag set are dropped. Rows keep the record's
/// first-seen label order. A missing record, or one with no flagged labels,
/// yields [`SafetySheet::NoDetails`].
#[must_use]
pub fn build_sheet(
    app: &AppEntry,
    record: Option<&AppSafetyRecord>,
    datatypes: &DatatypeDirectory,
    relations: &RelationIcons,
) -> SafetySheet {
    let rows: Vec<SafetyRow> = record
        .into_iter()
        .flat_map(AppSafetyRecord::iter)
        .filter_map(|(label, flag)| build_row(label, flag, datatypes, relations))
        .collect();

    if rows.is_empty() {
        SafetySheet::no_details(app.clone())
    } else {
        SafetySheet::Details {
            app: app.clone(),
            rows,
        }
    }
}

fn build_row(
    label: &str,
    flag: SafetyFlag,
    datatypes: &DatatypeDirectory,
    relations: &RelationIcons,
) -> Option<SafetyRow> {
    let relation = flag.relation()?;

    let entry = match_datatype_key(label, datatypes).and_then(|hit| datatypes.get(&hit.key));
    let (data_type, display_name, icon) = match entry {
        Some(entry) => (
            Resolution::Resolved(entry.key.clone()),
            entry.display_name().to_string(),
            entry.icon.clone(),
        ),
        None => (
            Resolution::Unresolved(label.to_string()),
            label.to_string(),
            String::new(),
        ),
    };

    Some(SafetyRow {
        data_type,
        display_name,
        icon,
        relation,
        indicators: indicators(relation, relations),
    })
}

/// Relation icons to draw for `relation`.
///
/// `Both` uses the combined icon when one is configured, otherwise the
/// shared and collected icons side by side. Kinds without an icon are
/// omitted.
#[must_use]
pub fn indicators(relation: RelationKind, relations: &RelationIcons) -> Vec<RelationIcon> {
    let pick = |kinds: &[RelationKind]| -> Vec<RelationIcon> {
        kinds
            .iter()
            .filter_map(|kind| relations.get(*kind).cloned())
            .collect()
    };

    match relation {
        RelationKind::Both => relations.get(RelationKind::Both).map_or_else(
            || pick(&[RelationKind::Shared, RelationKind::Collected]),
            |both| vec![both.clone()],
        ),
        single => pick(&[single]),
    }
}
