use clap::Subcommand;

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications.
    List {
        /// Only unread ones.
        #[arg(long)]
        unread: bool,
    },
    /// Unread count.
    Count,
    /// Mark one notification read.
    Read { id: u64 },
    /// Mark every notification read.
    ReadAll,
    /// Ask the backend to generate due/overdue notifications.
    Generate,
    /// Poll and print the inbox until interrupted.
    Watch {
        /// Poll interval in seconds (defaults to config).
        #[arg(long)]
        interval: Option<u64>,
    },
}
