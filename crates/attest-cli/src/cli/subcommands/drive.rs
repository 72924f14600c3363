use clap::Subcommand;

/// Google Drive commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DriveCommands {
    /// Print (and open) the Drive authorization URL.
    Auth {
        #[arg(long)]
        no_browser: bool,
    },
    /// Complete Drive authorization and refresh the connection flag.
    Callback,
    /// Whether Drive is connected.
    Status,
}
