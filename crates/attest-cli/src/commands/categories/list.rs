use attest_core::enums::{CategoryGroupCode, ReviewPeriod, StatusFilter, ViewMode};
use attest_views::category_detail::CategorySummary;
use attest_views::{CategoryList, ItemRange, PageSize};
use serde::Serialize;

use crate::cli::subcommands::CategoryListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListingResponse {
    controls: Vec<CategorySummary>,
    page: u32,
    page_size: PageSize,
    total_pages: u32,
    total_count: u64,
    range: ItemRange,
    pages: Vec<u32>,
}

pub async fn run(args: &CategoryListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut list = super::new_listing(ctx);
    apply_args(&mut list, args)?;
    list.refresh(&ctx.client).await;
    if let Some(error) = list.error() {
        anyhow::bail!("failed to list controls: {error}");
    }
    render(&list, flags)
}

/// Apply command-line filters to a fresh listing. The requested page goes
/// last since every filter change moves back to page 1.
pub fn apply_args(list: &mut CategoryList, args: &CategoryListArgs) -> anyhow::Result<()> {
    if let Some(search) = &args.search {
        list.commit_search(search);
    }
    list.set_review_period(parse_optional::<ReviewPeriod>(
        args.review_period.as_deref(),
        "review period",
    )?);
    list.set_status(parse_optional::<StatusFilter>(args.status.as_deref(), "status")?);
    list.set_assignee(args.assignee.clone());
    list.set_category_group(parse_optional::<CategoryGroupCode>(args.group.as_deref(), "group")?);
    list.set_show_hidden(args.show_hidden);
    list.set_show_all(args.show_all);
    if let Some(size) = &args.page_size {
        list.set_page_size(size.parse()?);
    }
    if let Some(page) = args.page {
        list.start_at_page(page);
    }
    Ok(())
}

/// Print the current page. Table output follows the listing's view mode;
/// machine formats always carry the full paging envelope.
pub fn render(list: &CategoryList, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controls: Vec<CategorySummary> = list.items().iter().map(CategorySummary::of).collect();
    if flags.format != OutputFormat::Table {
        let pagination = list.pagination();
        return output(
            &ListingResponse {
                controls,
                page: list.page(),
                page_size: list.page_size(),
                total_pages: pagination.total_pages(),
                total_count: pagination.total_count,
                range: pagination.range(),
                pages: pagination.window(),
            },
            flags.format,
        );
    }

    match list.view_mode() {
        ViewMode::Table => output(&controls, flags.format)?,
        ViewMode::List => {
            for control in &controls {
                println!("{}", list_line(control));
            }
        }
        ViewMode::Card => {
            for control in &controls {
                println!("{}\n", card(control));
            }
        }
    }
    if !flags.quiet {
        eprintln!("{}", footer(list));
    }
    Ok(())
}

fn list_line(control: &CategorySummary) -> String {
    format!(
        "#{:<5} {:<40} {:<18} {}",
        control.id, control.name, control.status, control.assignee
    )
}

fn card(control: &CategorySummary) -> String {
    let due = control
        .due_date
        .map_or_else(|| "no due date".to_string(), |date| format!("due {date}"));
    let hidden = if control.hidden { " (hidden)" } else { "" };
    format!(
        "[{}] {}{hidden}\n  {} | {} | {}\n  assignee: {}  approver: {}\n  {} | {} file(s)",
        control.id,
        control.name,
        control.group,
        control.review_period,
        control.status,
        control.assignee,
        control.approver,
        due,
        control.files
    )
}

/// `1 to 20 of 41 | page 1/3 [1] 2 3 | 2 filters`
pub fn footer(list: &CategoryList) -> String {
    let pagination = list.pagination();
    let window = pagination
        .window()
        .into_iter()
        .map(|page| {
            if page == pagination.page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let mut line = format!(
        "{} | page {}/{} {window}",
        pagination.range(),
        pagination.page,
        pagination.total_pages()
    );
    let active = list.filters().active_count();
    if active > 0 {
        line.push_str(&format!(" | {active} filter(s)"));
    }
    if let Some(error) = list.error() {
        line.push_str(&format!(" | error: {error}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use attest_views::Preferences;

    use super::*;

    fn listing() -> CategoryList {
        CategoryList::new(Preferences::default(), Duration::from_millis(300))
    }

    #[test]
    fn args_become_filters() {
        let mut list = listing();
        let args = CategoryListArgs {
            search: Some("  vpn ".into()),
            status: Some("overdue".into()),
            review_period: Some("quarterly".into()),
            page_size: Some("all".into()),
            ..CategoryListArgs::default()
        };
        apply_args(&mut list, &args).expect("args should apply");
        let query = list.query();
        assert_eq!(query.search.as_deref(), Some("vpn"));
        assert_eq!(query.status, Some(StatusFilter::Overdue));
        assert_eq!(query.review_period, Some(ReviewPeriod::Quarterly));
        assert_eq!(list.page_size(), PageSize::All);
    }

    #[test]
    fn requested_page_survives_filters() {
        let mut list = listing();
        let args = CategoryListArgs {
            status: Some("overdue".into()),
            page: Some(4),
            ..CategoryListArgs::default()
        };
        apply_args(&mut list, &args).expect("args should apply");
        assert_eq!(list.query().page, 4);
    }

    #[test]
    fn bad_status_is_rejected() {
        let mut list = listing();
        let args = CategoryListArgs {
            status: Some("finished".into()),
            ..CategoryListArgs::default()
        };
        assert!(apply_args(&mut list, &args).is_err());
    }

    #[test]
    fn footer_for_empty_listing() {
        let list = listing();
        assert_eq!(footer(&list), "0 to 0 of 0 | page 1/1 [1]");
    }
}
