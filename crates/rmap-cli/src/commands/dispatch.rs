use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status => commands::status::handle(ctx, flags),
        Commands::Options(args) => commands::options::handle(&args, ctx, flags),
        Commands::Choose(args) => commands::choose::handle(&args, ctx, flags),
        Commands::Reset => commands::reset::handle(ctx, flags),
        Commands::Report => commands::report::handle(ctx, flags),
        Commands::Estimate => commands::estimate::handle(ctx, flags),
        Commands::Catalog => commands::catalog::handle(ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
