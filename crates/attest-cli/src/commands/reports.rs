use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyticsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest dashboard`.
pub async fn dashboard(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.client.dashboard().await?;
    output(&stats, flags.format)
}

/// Handle `attest analytics`.
pub async fn analytics(args: &AnalyticsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analytics = ctx.client.analytics(args.mine).await?;
    output(&analytics, flags.format)
}
