use std::path::Path;

use dss_safety::SourceStatus;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusView<'a> {
    project_root: &'a Path,
    complete: bool,
    sources: &'a [SourceStatus],
    /// Export app names with no directory entry.
    orphans: &'a [String],
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = StatusView {
        project_root: &ctx.project_root,
        complete: ctx.report.is_complete(),
        sources: &ctx.report.sources,
        orphans: ctx.catalog.orphans(),
    };

    if flags.format != OutputFormat::Table {
        return output(&view, flags);
    }

    output(&view.sources, flags)?;
    if !view.orphans.is_empty() {
        println!();
        println!("unmatched export apps: {}", view.orphans.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::StatusView;
    use crate::commands::fixtures;

    #[test]
    fn status_lists_orphans() {
        let ctx = fixtures::context();
        let view = StatusView {
            project_root: &ctx.project_root,
            complete: ctx.report.is_complete(),
            sources: &ctx.report.sources,
            orphans: ctx.catalog.orphans(),
        };
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "project_root": "/srv/dss",
                "complete": true,
                "sources": [],
                "orphans": ["Ghost App"],
            })
        );
    }
}
