use clap::{Args, Subcommand};

/// Submission commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubmissionCommands {
    /// List submissions.
    List {
        #[arg(long)]
        category: Option<u64>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one submission.
    Get { id: u64 },
    /// Upload evidence for a control's open submission.
    Submit(SubmitArgs),
    /// Approve a submission.
    Approve {
        id: u64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Reject a submission.
    Reject {
        id: u64,
        #[arg(long)]
        notes: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Control id.
    pub category: u64,
    /// File to upload (repeatable).
    #[arg(long = "file", required = true)]
    pub files: Vec<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Due date (YYYY-MM-DD); defaults to the review-period recommendation.
    #[arg(long)]
    pub due_date: Option<String>,
}
