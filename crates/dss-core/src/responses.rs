//! Output types handed to the presentation layer.
//!
//! These are what `dss apps`, `dss show`, and `dss match` serialize.

use serde::{Deserialize, Serialize};

use crate::entities::{AppEntry, RelationIcon};
use crate::enums::RelationKind;
use crate::resolution::Resolution;

/// Message shown in place of a safety table when an app has no rows.
pub const NO_DETAILS_MESSAGE: &str = "No data safety details available for this app.";

/// One page of the app list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPage {
    pub page: usize,
    pub total_pages: usize,
    pub apps: Vec<AppEntry>,
}

/// One render-ready row of an app's safety table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRow {
    /// Datatype directory key, or the raw column header when no entry matched.
    pub data_type: Resolution<String>,
    pub display_name: String,
    /// Empty when the label did not resolve or the entry has no icon.
    pub icon: String,
    pub relation: RelationKind,
    /// Relation icons to draw, in order. Empty when none are configured.
    pub indicators: Vec<RelationIcon>,
}

/// The detail view for one app. `app` carries the directory icon shown next
/// to the name; apps outside the directory get an empty icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SafetySheet {
    Details { app: AppEntry, rows: Vec<SafetyRow> },
    NoDetails { app: AppEntry, message: String },
}

impl SafetySheet {
    #[must_use]
    pub fn no_details(app: AppEntry) -> Self {
        Self::NoDetails {
            app,
            message: NO_DETAILS_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub const fn app(&self) -> &AppEntry {
        match self {
            Self::Details { app, .. } | Self::NoDetails { app, .. } => app,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[SafetyRow] {
        match self {
            Self::Details { rows, .. } => rows,
            Self::NoDetails { .. } => &[],
        }
    }
}
