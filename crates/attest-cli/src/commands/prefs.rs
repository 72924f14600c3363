use serde::Serialize;

use attest_views::Preferences;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrefsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PrefsResponse {
    path: String,
    #[serde(flatten)]
    preferences: Preferences,
}

/// Handle `attest prefs`.
pub fn handle(action: &PrefsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut preferences = ctx.listing_preferences();
    if let PrefsCommands::Set { key, value } = action {
        preferences.set(key, value)?;
        ctx.preferences.save(&preferences)?;
    }
    output(
        &PrefsResponse {
            path: ctx.preferences.path().display().to_string(),
            preferences,
        },
        flags.format,
    )
}
