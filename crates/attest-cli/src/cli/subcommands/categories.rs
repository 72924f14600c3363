use clap::{Args, Subcommand};

/// Control commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List controls with filters and paging.
    List(CategoryListArgs),
    /// Show one control.
    Get { id: u64 },
    /// Create a control.
    Create(CategoryCreateArgs),
    /// Update a control.
    Update(CategoryUpdateArgs),
    /// Hide a control from the default listing.
    Hide { id: u64 },
    /// Make a hidden control visible again.
    Unhide { id: u64 },
    /// Delete a control.
    Delete {
        id: u64,
        /// Required to actually delete.
        #[arg(long)]
        yes: bool,
    },
    /// Submission history of a control.
    Submissions { id: u64 },
    /// Control groups with counts.
    Groups {
        /// Include hidden controls in the counts.
        #[arg(long)]
        show_hidden: bool,
        /// Flat list instead of sections.
        #[arg(long)]
        flat: bool,
    },
    /// Users that can be assigned to controls.
    Users,
    /// Download the control export.
    Export(CategoryExportArgs),
    /// Interactive listing: filter, search, and page from a prompt.
    Browse(CategoryListArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct CategoryListArgs {
    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,
    /// Review period (e.g. monthly, quarterly).
    #[arg(long)]
    pub review_period: Option<String>,
    /// Status: pending, overdue, submitted, under-review, approved, rejected, no-submission.
    #[arg(long)]
    pub status: Option<String>,
    /// Assignee user id.
    #[arg(long)]
    pub assignee: Option<String>,
    /// Group code (e.g. access-controls).
    #[arg(long)]
    pub group: Option<String>,
    /// Include hidden controls.
    #[arg(long)]
    pub show_hidden: bool,
    /// Show every control, not only those relevant to you.
    #[arg(long)]
    pub show_all: bool,
    /// Page number (1-based).
    #[arg(long)]
    pub page: Option<u32>,
    /// Page size: 20, 40, 100, or all (defaults to the saved preference).
    #[arg(long)]
    pub page_size: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CategoryCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub evidence_requirements: String,
    #[arg(long)]
    pub review_period: String,
    #[arg(long)]
    pub group: Option<String>,
    #[arg(long)]
    pub assignee: Option<u64>,
    #[arg(long)]
    pub approver: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct CategoryUpdateArgs {
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub evidence_requirements: Option<String>,
    #[arg(long)]
    pub review_period: Option<String>,
    #[arg(long)]
    pub group: Option<String>,
    #[arg(long, conflicts_with = "clear_assignee")]
    pub assignee: Option<u64>,
    #[arg(long)]
    pub clear_assignee: bool,
    #[arg(long, conflicts_with = "clear_approver")]
    pub approver: Option<u64>,
    #[arg(long)]
    pub clear_approver: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CategoryExportArgs {
    /// pdf or excel
    #[arg(long, default_value = "pdf")]
    pub export_format: String,
    /// Output path (defaults to controls_export.<ext>).
    #[arg(long)]
    pub output: Option<String>,
    /// Include hidden controls.
    #[arg(long)]
    pub show_hidden: bool,
}
