use attest_views::documents::DocumentBrowser;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{FileCommands, FileListArgs};
use crate::commands::shared::parse::parse_optional_date;
use crate::commands::submissions::required_notes;
use crate::context::AppContext;
use crate::output::output;

/// Handle `attest files`.
pub async fn handle(action: &FileCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FileCommands::List(args) => {
            let mut browser = browser_for(args)?;
            browser.refresh(&ctx.client).await;
            if let Some(error) = browser.error() {
                anyhow::bail!("failed to list files: {error}");
            }
            output(&browser.documents(), flags.format)
        }
        FileCommands::Grouped(args) => {
            let mut browser = browser_for(args)?;
            browser.refresh_days(&ctx.client).await;
            if let Some(error) = browser.error() {
                anyhow::bail!("failed to list files: {error}");
            }
            output(&browser.days(), flags.format)
        }
        FileCommands::Uploaders => {
            let uploaders = ctx.client.uploaders().await?;
            output(&uploaders, flags.format)
        }
        FileCommands::Approve { id, notes } => {
            let outcome = ctx.client.approve_file(*id, notes.as_deref()).await?;
            ctx.persist_cookies();
            output(&outcome, flags.format)
        }
        FileCommands::Reject { id, notes } => {
            let outcome = ctx.client.reject_file(*id, required_notes(notes)?).await?;
            ctx.persist_cookies();
            output(&outcome, flags.format)
        }
    }
}

fn browser_for(args: &FileListArgs) -> anyhow::Result<DocumentBrowser> {
    let from = parse_optional_date(args.from.as_deref(), "from")?;
    let to = parse_optional_date(args.to.as_deref(), "to")?;
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        anyhow::bail!("--from {from} is after --to {to}");
    }
    let mut browser = DocumentBrowser::new();
    browser.set_uploaded_by(args.uploaded_by);
    browser.set_date_from(from);
    browser.set_date_to(to);
    browser.set_category(args.category);
    Ok(browser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filters_from_args() {
        let args = FileListArgs {
            uploaded_by: Some(4),
            from: Some("2025-01-01".into()),
            ..FileListArgs::default()
        };
        let browser = browser_for(&args).unwrap();
        assert_eq!(browser.active_filter_count(), 2);
        assert_eq!(browser.filters().uploaded_by, Some(4));
    }

    #[test]
    fn inverted_date_range_is_rejected() {
        let args = FileListArgs {
            from: Some("2025-03-01".into()),
            to: Some("2025-01-01".into()),
            ..FileListArgs::default()
        };
        assert!(browser_for(&args).is_err());
    }
}
