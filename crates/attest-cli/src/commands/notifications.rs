use std::time::Duration;

use attest_views::notifications::{self, Inbox, NotificationPoller};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::context::AppContext;
use crate::output::{message, output};

#[derive(Debug, Serialize)]
struct CountResponse {
    unread_count: u64,
}

/// Handle `attest notifications`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_user()?;
    match action {
        NotificationCommands::List { unread } => {
            let items = ctx
                .client
                .notifications(Some(user.id), unread.then_some(false))
                .await?;
            output(&items, flags.format)
        }
        NotificationCommands::Count => {
            let unread_count = ctx.client.unread_count(user.id).await?;
            output(&CountResponse { unread_count }, flags.format)
        }
        NotificationCommands::Read { id } => {
            let mut inbox = Inbox::fetch(&ctx.client, user.id).await?;
            notifications::mark_read(&ctx.client, &mut inbox, *id).await?;
            ctx.persist_cookies();
            output(&CountResponse { unread_count: inbox.unread_count }, flags.format)
        }
        NotificationCommands::ReadAll => {
            let mut inbox = Inbox::default();
            notifications::mark_all_read(&ctx.client, &mut inbox, user.id).await?;
            ctx.persist_cookies();
            message("All notifications marked read.", flags)
        }
        NotificationCommands::Generate => {
            let generated = ctx.client.generate_notifications().await?;
            ctx.persist_cookies();
            output(&generated, flags.format)
        }
        NotificationCommands::Watch { interval } => {
            let interval = interval.map_or_else(
                || ctx.config.ui.notification_poll_interval(),
                |secs| Duration::from_secs(secs.max(1)),
            );
            watch(user.id, interval, ctx, flags).await
        }
    }
}

/// Print every new inbox snapshot until Ctrl-C.
async fn watch(user_id: u64, interval: Duration, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let poller = NotificationPoller::spawn(ctx.client.clone(), user_id, interval);
    let mut snapshots = poller.subscribe();
    if !flags.quiet {
        eprintln!("polling every {}s; Ctrl-C to stop", interval.as_secs());
    }

    let mut last_count = None;
    let result = loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => break signal.map_err(anyhow::Error::from),
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let Some(inbox) = snapshots.borrow_and_update().clone() else {
                    continue;
                };
                if last_count != Some(inbox.unread_count) {
                    last_count = Some(inbox.unread_count);
                    output(&inbox.unread, flags.format)?;
                    if !flags.quiet {
                        eprintln!("{} unread", inbox.unread_count);
                    }
                }
            }
        }
    };
    poller.stop().await;
    result
}
