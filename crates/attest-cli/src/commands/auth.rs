use attest_auth::{PasswordChange, SessionStatus};
use attest_core::entities::{ProfileUpdate, User};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthCommands, AuthPasswordArgs, AuthProfileArgs};
use crate::context::AppContext;
use crate::output::{message, output};

#[derive(Debug, Serialize)]
struct StatusResponse {
    signed_in: bool,
    verified: bool,
    user: Option<User>,
    google_drive_authenticated: bool,
}

#[derive(Debug, Serialize)]
struct LogoutResponse {
    signed_out: bool,
    server_acknowledged: bool,
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct GoogleUrlResponse {
    authorization_url: String,
    opened: bool,
}

/// Handle `attest auth`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => {
            let user = ctx
                .session
                .login(&ctx.client, &args.email, &args.password)
                .await?;
            output(&user, flags.format)
        }
        AuthCommands::Logout => {
            let outcome = ctx.session.logout(&ctx.client).await;
            output(
                &LogoutResponse {
                    signed_out: true,
                    server_acknowledged: outcome.server_acknowledged,
                    note: outcome.error,
                },
                flags.format,
            )
        }
        AuthCommands::Status => status(ctx, flags).await,
        AuthCommands::Whoami => {
            let user = ctx.require_user()?;
            output(&user, flags.format)
        }
        AuthCommands::Profile(args) => profile(args, ctx, flags).await,
        AuthCommands::Password(args) => password(args, ctx, flags).await,
        AuthCommands::GoogleUrl { no_browser } => {
            let open_browser = !no_browser;
            let url = ctx
                .session
                .start_google_login(&ctx.client, open_browser)
                .await?;
            output(
                &GoogleUrlResponse {
                    authorization_url: url,
                    opened: open_browser,
                },
                flags.format,
            )
        }
        AuthCommands::GoogleCallback { code } => {
            let user = ctx.session.complete_google_login(&ctx.client, code).await?;
            output(&user, flags.format)
        }
    }
}

async fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.session.check(&ctx.client).await;
    let response = match status {
        SessionStatus::SignedOut => StatusResponse {
            signed_in: false,
            verified: false,
            user: None,
            google_drive_authenticated: false,
        },
        SessionStatus::SignedIn { user, verified } => {
            ctx.persist_cookies();
            StatusResponse {
                signed_in: true,
                verified,
                user: Some(user),
                google_drive_authenticated: ctx.session.drive_authenticated(),
            }
        }
    };
    output(&response, flags.format)
}

async fn profile(args: &AuthProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    let update = ProfileUpdate {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
    };
    let user = ctx.session.update_profile(&ctx.client, &update).await?;
    ctx.persist_cookies();
    output(&user, flags.format)
}

async fn password(args: &AuthPasswordArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    let change = PasswordChange {
        current: args.current.clone(),
        new: args.new.clone(),
        confirmation: args.confirm.clone(),
    };
    ctx.session.change_password(&ctx.client, &change).await?;
    ctx.persist_cookies();
    message("Password changed.", flags)
}
