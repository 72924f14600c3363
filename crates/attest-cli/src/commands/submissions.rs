use attest_client::SubmissionQuery;
use attest_core::enums::SubmissionStatus;
use attest_views::category_detail::{EvidenceDraft, submit_evidence};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SubmissionCommands, SubmitArgs};
use crate::commands::shared::parse::{parse_optional, parse_optional_date, read_upload};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `attest submissions`.
pub async fn handle(
    action: &SubmissionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubmissionCommands::List { category, status } => {
            let query = SubmissionQuery {
                category: *category,
                status: parse_optional::<SubmissionStatus>(status.as_deref(), "status")?,
            };
            let submissions = ctx.client.list_submissions(&query).await?;
            output(&submissions, flags.format)
        }
        SubmissionCommands::Get { id } => {
            let submission = ctx.client.submission(*id).await?;
            output(&submission, flags.format)
        }
        SubmissionCommands::Submit(args) => submit(args, ctx, flags).await,
        SubmissionCommands::Approve { id, notes } => {
            let outcome = ctx.client.approve_submission(*id, notes.as_deref()).await?;
            ctx.persist_cookies();
            if let Some(warning) = &outcome.upload_warning {
                tracing::warn!(submission = id, %warning, "approved with drive upload warning");
            }
            output(&outcome, flags.format)
        }
        SubmissionCommands::Reject { id, notes } => {
            let notes = required_notes(notes)?;
            let submission = ctx.client.reject_submission(*id, notes).await?;
            ctx.persist_cookies();
            output(&submission, flags.format)
        }
    }
}

async fn submit(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let files = args
        .files
        .iter()
        .map(|path| read_upload(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let draft = EvidenceDraft {
        files,
        notes: args.notes.clone().filter(|notes| !notes.trim().is_empty()),
        due_date: parse_optional_date(args.due_date.as_deref(), "due date")?,
    };

    let detail = ctx.client.category(args.category).await?;
    let today = chrono::Local::now().date_naive();

    let progress = Progress::spinner(&format!(
        "Uploading {} file(s) to '{}'...",
        draft.files.len(),
        detail.category.name
    ));
    let submission = match submit_evidence(&ctx.client, &detail.category, draft, today).await {
        Ok(submission) => submission,
        Err(error) => {
            progress.finish_err("upload failed");
            return Err(error.into());
        }
    };
    progress.finish_ok("evidence submitted");
    ctx.persist_cookies();
    output(&submission, flags.format)
}

/// Rejections must say why.
pub fn required_notes(notes: &str) -> anyhow::Result<&str> {
    let notes = notes.trim();
    if notes.is_empty() {
        anyhow::bail!("rejection notes are required");
    }
    Ok(notes)
}
