use dss_core::Resolution;
use dss_core::entities::AppEntry;
use dss_core::errors::CoreError;
use dss_core::responses::{SafetyRow, SafetySheet};
use serde::Serialize;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Flat table row for one safety row.
#[derive(Debug, Serialize)]
struct RowView<'a> {
    data_type: &'a str,
    relation: &'a str,
    icon: &'a str,
    indicators: Vec<&'a str>,
}

impl<'a> From<&'a SafetyRow> for RowView<'a> {
    fn from(row: &'a SafetyRow) -> Self {
        Self {
            data_type: &row.display_name,
            relation: row.relation.as_str(),
            icon: &row.icon,
            indicators: row.indicators.iter().map(|i| i.icon.as_str()).collect(),
        }
    }
}

pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sheet = sheet(&args.app, ctx)?;

    if flags.format != OutputFormat::Table {
        return output(&sheet, flags);
    }

    match &sheet {
        SafetySheet::Details { app, rows } => {
            if !flags.quiet {
                println!("{}", heading(app));
            }
            let views: Vec<RowView<'_>> = rows.iter().map(RowView::from).collect();
            output(&views, flags)
        }
        SafetySheet::NoDetails { app, message } => {
            if !flags.quiet {
                println!("{}", heading(app));
            }
            output(message, flags)
        }
    }
}

/// App name, followed by its icon when the directory has one.
fn heading(app: &AppEntry) -> String {
    if app.icon.is_empty() {
        app.name.clone()
    } else {
        format!("{}  ({})", app.name, app.icon)
    }
}

/// Sheet for a free-text app name. Only names that resolve to the app
/// directory have a detail view.
fn sheet(raw: &str, ctx: &AppContext) -> Result<SafetySheet, CoreError> {
    match ctx.catalog.resolve_app(raw) {
        Resolution::Resolved(app) => Ok(ctx.catalog.sheet(&app)),
        Resolution::Unresolved(raw) => Err(CoreError::NotFound {
            entity_type: "app".to_string(),
            id: raw,
        }),
    }
}
