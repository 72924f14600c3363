use attest_core::entities::{CategoryDraft, CategoryPatch};
use attest_core::enums::{CategoryGroupCode, ReviewPeriod};
use attest_views::category_detail::CategorySummary;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CategoryCreateArgs, CategoryUpdateArgs};
use crate::commands::shared::parse::{parse_enum, parse_optional};
use crate::context::AppContext;
use crate::output::{message, output};

pub async fn create(args: &CategoryCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = draft_from(args)?;
    let category = ctx.client.create_category(&draft).await?;
    ctx.persist_cookies();
    output(&CategorySummary::of(&category), flags.format)
}

pub async fn update(args: &CategoryUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let patch = patch_from(args)?;
    if patch.is_empty() {
        anyhow::bail!("nothing to update; pass at least one field");
    }
    let category = ctx.client.update_category(args.id, &patch).await?;
    ctx.persist_cookies();
    output(&CategorySummary::of(&category), flags.format)
}

pub async fn set_visibility(
    id: u64,
    visible: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let category = if visible {
        ctx.client.unhide_category(id).await?
    } else {
        ctx.client.hide_category(id).await?
    };
    ctx.persist_cookies();
    output(&CategorySummary::of(&category), flags.format)
}

pub async fn delete(id: u64, confirmed: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !confirmed {
        anyhow::bail!("refusing to delete control {id} without --yes");
    }
    ctx.client.delete_category(id).await?;
    ctx.persist_cookies();
    message(&format!("Deleted control {id}."), flags)
}

fn draft_from(args: &CategoryCreateArgs) -> anyhow::Result<CategoryDraft> {
    let name = args.name.trim();
    if name.is_empty() {
        anyhow::bail!("control name must not be empty");
    }
    Ok(CategoryDraft {
        name: name.to_string(),
        description: args.description.clone(),
        evidence_requirements: args.evidence_requirements.clone(),
        review_period: parse_enum::<ReviewPeriod>(&args.review_period, "review period")?,
        category_group: parse_optional::<CategoryGroupCode>(args.group.as_deref(), "group")?,
        assignee_id: args.assignee,
        approver_id: args.approver,
    })
}

/// Only fields passed on the command line end up in the patch. The
/// `--clear-*` flags send an explicit null.
fn patch_from(args: &CategoryUpdateArgs) -> anyhow::Result<CategoryPatch> {
    Ok(CategoryPatch {
        name: args.name.clone(),
        description: args.description.clone(),
        evidence_requirements: args.evidence_requirements.clone(),
        review_period: parse_optional::<ReviewPeriod>(args.review_period.as_deref(), "review period")?,
        category_group: parse_optional::<CategoryGroupCode>(args.group.as_deref(), "group")?,
        assignee_id: if args.clear_assignee {
            Some(None)
        } else {
            args.assignee.map(Some)
        },
        approver_id: if args.clear_approver {
            Some(None)
        } else {
            args.approver.map(Some)
        },
        is_active: None,
    })
}
