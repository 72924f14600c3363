//! `attest categories browse`: a line-driven prompt over one listing.
//!
//! Lines starting with `/` are search keystrokes and go through the
//! listing's debounce; everything else is a command applied immediately.

use std::time::Instant;

use attest_core::enums::{CategoryGroupCode, ReviewPeriod, StatusFilter, ViewMode};
use attest_views::{CategoryList, PageSize};
use tokio::sync::mpsc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryListArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::ui;

const HELP: &str = "\
/<text>        search (runs once you stop typing)
n | p          next / previous page
page <n>       jump to page
status <s>     pending, overdue, submitted, under-review, approved, rejected, no-submission, any
period <p>     monthly, quarterly, annually, ..., any
group <g>      access-controls, ..., any
assignee <id>  filter by assignee, any to clear
hidden | all   toggle hidden controls / every control
size <n>       20, 40, 100, all
view <v>       card, list, table
clear          clear filters
r              reload
q              quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseAction {
    Search(String),
    Next,
    Previous,
    Page(u32),
    Status(Option<StatusFilter>),
    Period(Option<ReviewPeriod>),
    Group(Option<CategoryGroupCode>),
    Assignee(Option<String>),
    ToggleHidden,
    ToggleAll,
    Size(PageSize),
    View(ViewMode),
    Clear,
    Reload,
    Help,
    Quit,
}

/// `any` (or `-`) clears a filter.
fn optional<T>(value: &str, field: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr<Err = attest_core::CoreError>,
{
    if matches!(value, "any" | "-" | "") {
        Ok(None)
    } else {
        parse_enum(value, field).map(Some)
    }
}

fn parse_action(line: &str) -> anyhow::Result<BrowseAction> {
    if let Some(text) = line.strip_prefix('/') {
        return Ok(BrowseAction::Search(text.to_string()));
    }
    let line = line.trim();
    let (command, value) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, value)| (command, value.trim()));
    let action = match command {
        "n" | "next" => BrowseAction::Next,
        "p" | "prev" | "previous" => BrowseAction::Previous,
        "page" => BrowseAction::Page(
            value
                .parse()
                .map_err(|_| anyhow::anyhow!("page expects a number, got '{value}'"))?,
        ),
        "status" => BrowseAction::Status(optional(value, "status")?),
        "period" => BrowseAction::Period(optional(value, "review period")?),
        "group" => BrowseAction::Group(optional(value, "group")?),
        "assignee" => BrowseAction::Assignee(
            Some(value.to_string()).filter(|id| !matches!(id.as_str(), "any" | "-" | "")),
        ),
        "hidden" => BrowseAction::ToggleHidden,
        "all" => BrowseAction::ToggleAll,
        "size" => BrowseAction::Size(value.parse()?),
        "view" => BrowseAction::View(parse_enum(value, "view mode")?),
        "clear" => BrowseAction::Clear,
        "r" | "reload" | "" => BrowseAction::Reload,
        "?" | "h" | "help" => BrowseAction::Help,
        "q" | "quit" | "exit" => BrowseAction::Quit,
        other => anyhow::bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(action)
}

/// What the loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    Refetch,
    Redraw,
    Quit,
}

fn apply(list: &mut CategoryList, action: BrowseAction, now: Instant) -> Step {
    let changed = match action {
        BrowseAction::Search(text) => {
            list.type_search(&text, now);
            return Step::Idle;
        }
        BrowseAction::Next => list.next_page(),
        BrowseAction::Previous => list.previous_page(),
        BrowseAction::Page(page) => list.go_to_page(page),
        BrowseAction::Status(status) => list.set_status(status),
        BrowseAction::Period(period) => list.set_review_period(period),
        BrowseAction::Group(group) => list.set_category_group(group),
        BrowseAction::Assignee(assignee) => list.set_assignee(assignee),
        BrowseAction::ToggleHidden => {
            let show = !list.filters().show_hidden;
            list.set_show_hidden(show)
        }
        BrowseAction::ToggleAll => {
            let show = !list.filters().show_all;
            list.set_show_all(show)
        }
        BrowseAction::Size(size) => list.set_page_size(size),
        BrowseAction::View(mode) => {
            list.set_view_mode(mode);
            return Step::Redraw;
        }
        BrowseAction::Clear => list.clear_filters(),
        BrowseAction::Reload => true,
        BrowseAction::Help => {
            println!("{HELP}");
            return Step::Idle;
        }
        BrowseAction::Quit => return Step::Quit,
    };
    if changed { Step::Refetch } else { Step::Idle }
}

/// Forward stdin lines into the async loop. Ends when stdin closes.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

async fn settle(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}

pub async fn run(args: &CategoryListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut list = super::new_listing(ctx);
    super::list::apply_args(&mut list, args)?;
    let saved = list.preferences();

    list.refresh(&ctx.client).await;
    super::list::render(&list, flags)?;
    if ui::prefs().interactive {
        eprintln!("type 'help' for commands");
    }

    let mut lines = spawn_stdin_reader();
    loop {
        let step = tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else { break };
                match parse_action(&line) {
                    Ok(action) => apply(&mut list, action, Instant::now()),
                    Err(error) => {
                        eprintln!("{error}");
                        Step::Idle
                    }
                }
            }
            () = settle(list.search_deadline()) => {
                if list.poll_search(Instant::now()) { Step::Refetch } else { Step::Idle }
            }
        };
        match step {
            Step::Quit => break,
            Step::Idle => {}
            Step::Redraw => super::list::render(&list, flags)?,
            Step::Refetch => {
                list.refresh(&ctx.client).await;
                super::list::render(&list, flags)?;
                list.dismiss_error();
            }
        }
    }

    if list.preferences() != saved
        && let Err(error) = ctx.preferences.save(&list.preferences())
    {
        tracing::warn!(%error, "failed to save listing preferences");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use attest_views::Preferences;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_action("n").unwrap(), BrowseAction::Next);
        assert_eq!(parse_action("page 3").unwrap(), BrowseAction::Page(3));
        assert_eq!(
            parse_action("status under-review").unwrap(),
            BrowseAction::Status(Some(StatusFilter::UnderReview))
        );
        assert_eq!(parse_action("period any").unwrap(), BrowseAction::Period(None));
        assert_eq!(parse_action("size all").unwrap(), BrowseAction::Size(PageSize::All));
        assert_eq!(parse_action("view card").unwrap(), BrowseAction::View(ViewMode::Card));
        assert_eq!(
            parse_action("/ vpn access").unwrap(),
            BrowseAction::Search(" vpn access".into())
        );
        assert!(parse_action("page two").is_err());
        assert!(parse_action("dance").is_err());
    }

    #[test]
    fn search_waits_for_debounce() {
        let mut list = CategoryList::new(Preferences::default(), Duration::from_millis(300));
        let start = Instant::now();
        let step = apply(&mut list, BrowseAction::Search("vpn".into()), start);
        assert_eq!(step, Step::Idle);
        assert_eq!(list.query().search, None);
        assert!(!list.poll_search(start + Duration::from_millis(100)));
        assert!(list.poll_search(start + Duration::from_millis(300)));
        assert_eq!(list.query().search.as_deref(), Some("vpn"));
    }

    #[test]
    fn filter_changes_refetch_only_when_changed() {
        let mut list = CategoryList::new(Preferences::default(), Duration::from_millis(300));
        let now = Instant::now();
        let overdue = BrowseAction::Status(Some(StatusFilter::Overdue));
        assert_eq!(apply(&mut list, overdue.clone(), now), Step::Refetch);
        assert_eq!(apply(&mut list, overdue, now), Step::Idle);
        assert_eq!(apply(&mut list, BrowseAction::View(ViewMode::List), now), Step::Redraw);
        assert_eq!(apply(&mut list, BrowseAction::Quit, now), Step::Quit);
    }
}
