use clap::Subcommand;

/// Preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PrefsCommands {
    /// Show saved preferences.
    Show,
    /// Set a preference (view-mode card|list|table, page-size 20|40|100|all).
    Set { key: String, value: String },
}
