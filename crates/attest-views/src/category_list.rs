//! State for the control listing page.
//!
//! Any filter change (including page size) puts the listing back on page 1.
//! Each fetch is stamped with a generation; a response for an older
//! generation is dropped so a slow early request can never overwrite the
//! results of a later one. A failed fetch keeps the rows already on screen.

use std::time::{Duration, Instant};

use attest_client::{ApiClient, ApiError, CategoryQuery};
use attest_core::entities::Category;
use attest_core::enums::{CategoryGroupCode, ReviewPeriod, StatusFilter, ViewMode};
use attest_core::responses::Paginated;

use crate::debounce::Debouncer;
use crate::filters::CategoryFilters;
use crate::pagination::{ItemRange, PageSize, Pagination};
use crate::preferences::Preferences;

/// A fetch in flight: its generation and the query it was issued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: CategoryQuery,
}

#[derive(Debug, Clone)]
pub struct CategoryList {
    filters: CategoryFilters,
    page: u32,
    page_size: PageSize,
    view_mode: ViewMode,
    items: Vec<Category>,
    total_count: u64,
    loading: bool,
    error: Option<String>,
    generation: u64,
    search: Debouncer<String>,
}

impl CategoryList {
    #[must_use]
    pub fn new(preferences: Preferences, search_debounce: Duration) -> Self {
        Self {
            filters: CategoryFilters::default(),
            page: 1,
            page_size: preferences.page_size,
            view_mode: preferences.view_mode,
            items: Vec::new(),
            total_count: 0,
            loading: false,
            error: None,
            generation: 0,
            search: Debouncer::new(search_debounce),
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &CategoryFilters {
        &self.filters
    }

    #[must_use]
    pub fn items(&self) -> &[Category] {
        &self.items
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Preferences to persist: view mode and page size only.
    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        Preferences {
            view_mode: self.view_mode,
            page_size: self.page_size,
        }
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.total_count)
    }

    #[must_use]
    pub fn range(&self) -> ItemRange {
        self.pagination().range()
    }

    // -- search ---------------------------------------------------------

    /// Feed a keystroke. The query only changes once the input settles.
    pub fn type_search(&mut self, text: &str, now: Instant) {
        self.filters.set_search_input(text);
        self.search.input(text.to_string(), now);
    }

    /// When the pending search input settles.
    #[must_use]
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Commit the search input if its quiet period has passed. Returns
    /// whether the query changed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(text) => self.commit_search(&text),
            None => false,
        }
    }

    /// Commit `text` immediately, bypassing the debounce.
    pub fn commit_search(&mut self, text: &str) -> bool {
        self.search.cancel();
        self.filters.set_search_input(text);
        let changed = self.filters.commit_search(text);
        self.reset_page_if(changed)
    }

    // -- filters --------------------------------------------------------

    pub fn set_review_period(&mut self, period: Option<ReviewPeriod>) -> bool {
        let changed = self.filters.set_review_period(period);
        self.reset_page_if(changed)
    }

    pub fn set_status(&mut self, status: Option<StatusFilter>) -> bool {
        let changed = self.filters.set_status(status);
        self.reset_page_if(changed)
    }

    pub fn set_assignee(&mut self, assignee: Option<String>) -> bool {
        let changed = self.filters.set_assignee(assignee);
        self.reset_page_if(changed)
    }

    pub fn set_category_group(&mut self, group: Option<CategoryGroupCode>) -> bool {
        let changed = self.filters.set_category_group(group);
        self.reset_page_if(changed)
    }

    pub fn set_show_hidden(&mut self, show: bool) -> bool {
        let changed = self.filters.set_show_hidden(show);
        self.reset_page_if(changed)
    }

    pub fn set_show_all(&mut self, show: bool) -> bool {
        let changed = self.filters.set_show_all(show);
        self.reset_page_if(changed)
    }

    pub fn clear_filters(&mut self) -> bool {
        self.search.cancel();
        let changed = self.filters.clear();
        self.reset_page_if(changed)
    }

    pub fn set_page_size(&mut self, size: PageSize) -> bool {
        let changed = self.page_size != size;
        self.page_size = size;
        self.reset_page_if(changed)
    }

    pub const fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // -- paging ---------------------------------------------------------

    /// Jump to `page`, clamped to the known page count.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = self.pagination().clamp(page);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Open the listing on `page` before anything is known about the page
    /// count. Only the lower bound is enforced; the backend rejects pages
    /// past the end.
    pub fn start_at_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.pagination().next())
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.pagination().previous())
    }

    const fn reset_page_if(&mut self, changed: bool) -> bool {
        if changed {
            self.page = 1;
        }
        changed
    }

    // -- fetching -------------------------------------------------------

    /// Backend query for the current state.
    #[must_use]
    pub fn query(&self) -> CategoryQuery {
        let search = Some(self.filters.search.clone()).filter(|s| !s.is_empty());
        CategoryQuery {
            search,
            review_period: self.filters.review_period,
            status: self.filters.status,
            assignee: self.filters.assignee.clone(),
            category_group: self.filters.category_group,
            show_hidden: self.filters.show_hidden,
            show_all: self.filters.show_all,
            page: self.page,
            page_size: self.page_size.value(),
        }
    }

    /// Start a fetch: bumps the generation and marks the listing loading.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            query: self.query(),
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and
    /// the result was dropped.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Paginated<Category>, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.generation,
                "dropping stale category listing"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.total_count = page.count;
                self.items = page.results;
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load categories");
                self.error = Some(error.user_message());
            }
        }
        true
    }

    /// Fetch the current query and apply the result.
    pub async fn refresh(&mut self, client: &ApiClient) -> bool {
        let ticket = self.begin_fetch();
        let result = client.list_categories(&ticket.query).await;
        self.apply(&ticket, result)
    }
}
