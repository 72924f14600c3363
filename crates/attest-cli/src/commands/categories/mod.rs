mod browse;
mod export;
mod groups;
mod list;
mod manage;

use attest_views::CategoryList;
use attest_views::category_detail::CategoryOverview;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest categories`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List(args) => list::run(args, ctx, flags).await,
        CategoryCommands::Browse(args) => browse::run(args, ctx, flags).await,
        CategoryCommands::Get { id } => {
            let detail = ctx.client.category(*id).await?;
            output(&CategoryOverview::of(&detail), flags.format)
        }
        CategoryCommands::Create(args) => manage::create(args, ctx, flags).await,
        CategoryCommands::Update(args) => manage::update(args, ctx, flags).await,
        CategoryCommands::Hide { id } => manage::set_visibility(*id, false, ctx, flags).await,
        CategoryCommands::Unhide { id } => manage::set_visibility(*id, true, ctx, flags).await,
        CategoryCommands::Delete { id, yes } => manage::delete(*id, *yes, ctx, flags).await,
        CategoryCommands::Submissions { id } => {
            let submissions = ctx.client.category_submissions(*id).await?;
            output(&submissions, flags.format)
        }
        CategoryCommands::Groups { show_hidden, flat } => {
            groups::run(*show_hidden, *flat, ctx, flags).await
        }
        CategoryCommands::Users => {
            let users = ctx.client.assignable_users().await?;
            output(&users, flags.format)
        }
        CategoryCommands::Export(args) => export::run(args, ctx, flags).await,
    }
}

/// A listing seeded from saved preferences and the configured debounce.
fn new_listing(ctx: &AppContext) -> CategoryList {
    CategoryList::new(ctx.listing_preferences(), ctx.config.ui.search_debounce())
}
