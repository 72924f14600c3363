use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Categories { action } => commands::categories::handle(&action, ctx, flags).await,
        Commands::Submissions { action } => {
            commands::submissions::handle(&action, ctx, flags).await
        }
        Commands::Files { action } => commands::files::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::reports::dashboard(ctx, flags).await,
        Commands::Analytics(args) => commands::reports::analytics(&args, ctx, flags).await,
        Commands::Notifications { action } => {
            commands::notifications::handle(&action, ctx, flags).await
        }
        Commands::Drive { action } => commands::drive::handle(&action, ctx, flags).await,
        Commands::Prefs { action } => commands::prefs::handle(&action, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
