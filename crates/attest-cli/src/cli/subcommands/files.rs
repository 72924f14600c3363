use clap::{Args, Subcommand};

/// Evidence file commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FileCommands {
    /// List uploaded files.
    List(FileListArgs),
    /// Files grouped by day and uploader.
    Grouped(FileListArgs),
    /// Everyone who has uploaded a file.
    Uploaders,
    /// Approve a single file.
    Approve {
        id: u64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Reject a single file.
    Reject {
        id: u64,
        #[arg(long)]
        notes: String,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct FileListArgs {
    /// Uploader user id.
    #[arg(long)]
    pub uploaded_by: Option<u64>,
    /// Earliest upload date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Latest upload date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    /// Control id.
    #[arg(long)]
    pub category: Option<u64>,
}
