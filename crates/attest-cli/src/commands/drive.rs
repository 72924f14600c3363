use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DriveCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DriveAuthResponse {
    authorization_url: String,
    opened: bool,
}

#[derive(Debug, Serialize)]
struct DriveStatusResponse {
    google_drive_authenticated: bool,
    message: Option<String>,
}

/// Handle `attest drive`.
pub async fn handle(action: &DriveCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    match action {
        DriveCommands::Auth { no_browser } => {
            let url = ctx.client.drive_auth_url().await?.authorization_url;
            let mut opened = false;
            if !no_browser {
                match open::that(&url) {
                    Ok(()) => opened = true,
                    Err(error) => tracing::warn!(%error, "failed to open browser"),
                }
            }
            output(
                &DriveAuthResponse {
                    authorization_url: url,
                    opened,
                },
                flags.format,
            )
        }
        DriveCommands::Callback => {
            let response = ctx.client.drive_callback().await?;
            let authenticated = ctx.session.refresh_drive_flag(&ctx.client).await;
            ctx.persist_cookies();
            output(
                &DriveStatusResponse {
                    google_drive_authenticated: authenticated,
                    message: Some(response.message).filter(|message| !message.is_empty()),
                },
                flags.format,
            )
        }
        DriveCommands::Status => output(
            &DriveStatusResponse {
                google_drive_authenticated: ctx.session.drive_authenticated(),
                message: None,
            },
            flags.format,
        ),
    }
}
