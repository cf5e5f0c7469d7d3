use dss_core::Resolution;
use dss_safety::DatatypeMatch;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MatchArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &MatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result: Resolution<DatatypeMatch> = ctx.catalog.match_datatype(&args.label);
    if !result.is_resolved() {
        tracing::info!(label = %args.label, "no datatype directory entry matched");
    }
    output(&result, flags)
}
