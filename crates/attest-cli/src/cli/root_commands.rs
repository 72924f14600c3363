use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CategoryCommands, DriveCommands, FileCommands, NotificationCommands,
    PrefsCommands, SubmissionCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, and manage your account.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Compliance controls.
    Categories {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Evidence submissions and review decisions.
    Submissions {
        #[command(subcommand)]
        action: SubmissionCommands,
    },
    /// Uploaded evidence files.
    Files {
        #[command(subcommand)]
        action: FileCommands,
    },
    /// Dashboard counters.
    Dashboard,
    /// Compliance analytics.
    Analytics(AnalyticsArgs),
    /// Notifications for the signed-in user.
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Google Drive connection.
    Drive {
        #[command(subcommand)]
        action: DriveCommands,
    },
    /// Saved listing preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
    /// Dump the JSON Schema of an output type.
    Schema(SchemaArgs),
}

/// Arguments for `attest analytics`.
#[derive(Clone, Debug, Args)]
pub struct AnalyticsArgs {
    /// Only controls assigned to you.
    #[arg(long)]
    pub mine: bool,
}

/// Arguments for `attest schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name (e.g. category, submission, user, notification).
    pub type_name: String,
}
