//! Filter dimensions of the control listing.
//!
//! Every setter reports whether the value actually changed so the caller can
//! reset paging only on real changes.

use attest_core::enums::{CategoryGroupCode, ReviewPeriod, StatusFilter};
use serde::Serialize;

/// Current filter values. `search_input` is what the user is typing;
/// `search` is the settled value that is actually queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryFilters {
    pub search_input: String,
    pub search: String,
    pub review_period: Option<ReviewPeriod>,
    pub status: Option<StatusFilter>,
    pub assignee: Option<String>,
    pub category_group: Option<CategoryGroupCode>,
    pub show_hidden: bool,
    pub show_all: bool,
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl CategoryFilters {
    /// Raw keystrokes. Never a filter change on its own.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Commit a settled search string.
    pub fn commit_search(&mut self, text: &str) -> bool {
        replace(&mut self.search, text.trim().to_string())
    }

    pub fn set_review_period(&mut self, period: Option<ReviewPeriod>) -> bool {
        replace(&mut self.review_period, period)
    }

    pub fn set_status(&mut self, status: Option<StatusFilter>) -> bool {
        replace(&mut self.status, status)
    }

    /// Assignee filter by user id; blank clears it.
    pub fn set_assignee(&mut self, assignee: Option<String>) -> bool {
        let assignee = assignee
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        replace(&mut self.assignee, assignee)
    }

    pub fn set_category_group(&mut self, group: Option<CategoryGroupCode>) -> bool {
        replace(&mut self.category_group, group)
    }

    pub fn set_show_hidden(&mut self, show: bool) -> bool {
        replace(&mut self.show_hidden, show)
    }

    pub fn set_show_all(&mut self, show: bool) -> bool {
        replace(&mut self.show_all, show)
    }

    /// Clear the user-facing filters. Group scope and the hidden toggle are
    /// page-level settings and stay as they are.
    pub fn clear(&mut self) -> bool {
        let cleared = Self {
            category_group: self.category_group,
            show_hidden: self.show_hidden,
            ..Self::default()
        };
        replace(self, cleared)
    }

    /// Number of user-facing filters currently set, for the filter badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.search_input.trim().is_empty(),
            self.review_period.is_some(),
            self.status.is_some(),
            self.assignee.is_some(),
            self.show_all,
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_the_same_value_is_not_a_change() {
        let mut filters = CategoryFilters::default();
        assert!(filters.set_status(Some(StatusFilter::Overdue)));
        assert!(!filters.set_status(Some(StatusFilter::Overdue)));
        assert!(filters.set_status(None));
        assert!(!filters.set_show_hidden(false));
    }

    #[test]
    fn search_commit_trims_and_compares() {
        let mut filters = CategoryFilters::default();
        assert!(filters.commit_search(" backup "));
        assert_eq!(filters.search, "backup");
        assert!(!filters.commit_search("backup"));
    }

    #[test]
    fn blank_assignee_clears() {
        let mut filters = CategoryFilters::default();
        assert!(filters.set_assignee(Some("7".into())));
        assert!(filters.set_assignee(Some("  ".into())));
        assert_eq!(filters.assignee, None);
    }

    #[test]
    fn active_count_ignores_page_level_settings() {
        let mut filters = CategoryFilters::default();
        filters.set_search_input("vpn");
        filters.set_review_period(Some(ReviewPeriod::Monthly));
        filters.set_show_all(true);
        filters.set_show_hidden(true);
        filters.set_category_group(Some(CategoryGroupCode::AccessControls));
        assert_eq!(filters.active_count(), 3);

        assert!(filters.clear());
        assert_eq!(filters.active_count(), 0);
        assert!(filters.show_hidden);
        assert_eq!(
            filters.category_group,
            Some(CategoryGroupCode::AccessControls)
        );
        assert!(!filters.clear());
    }
}
