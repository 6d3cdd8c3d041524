use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Gym { action } => commands::gym::handle(&action, ctx, flags).await,
        Commands::CheckIn(args) => commands::check_in::handle(&args, ctx, flags).await,
        Commands::Validate(args) => commands::validate::handle(&args, ctx, flags).await,
        Commands::History(args) => commands::history::handle_history(&args, ctx, flags).await,
        Commands::Metrics(args) => commands::history::handle_metrics(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
