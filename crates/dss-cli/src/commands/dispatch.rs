use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Apps(args) => commands::apps::handle(&args, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Match(args) => commands::matching::handle(&args, ctx, flags),
        Commands::Status => commands::status::handle(ctx, flags),
    }
}
