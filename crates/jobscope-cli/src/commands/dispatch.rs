use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard(args) => commands::dashboard::handle(args, ctx, flags),
        Commands::Report(args) => commands::report::handle(args, ctx, flags),
        Commands::Industries(args) => commands::industries::handle(args, ctx, flags),
        Commands::Explore(args) => commands::explore::handle(args, ctx, flags),
        Commands::Diagnostics => commands::diagnostics::handle(ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
