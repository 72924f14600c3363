//! Page sizes, page counts, the numbered page window, and the
//! "x to y of z" range label.

use std::fmt;
use std::str::FromStr;

use attest_client::categories::PAGE_SIZE_ALL;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Number of page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Requested page size. `All` is sent as [`PAGE_SIZE_ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum PageSize {
    Fixed(u32),
    All,
}

impl PageSize {
    /// Choices offered by the page-size selector.
    pub const OPTIONS: [Self; 4] = [Self::Fixed(20), Self::Fixed(40), Self::Fixed(100), Self::All];

    /// Value sent as `page_size`.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Fixed(size) => size,
            Self::All => PAGE_SIZE_ALL,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Fixed(20)
    }
}

impl From<u32> for PageSize {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::default(),
            size if size >= PAGE_SIZE_ALL => Self::All,
            size => Self::Fixed(size),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.value()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(size) => write!(f, "{size}"),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match s.parse::<u32>() {
            Ok(size) if size > 0 => Ok(Self::from(size)),
            _ => Err(ViewError::InvalidInput(format!(
                "invalid page size '{s}': expected a positive number or 'all'"
            ))),
        }
    }
}

/// One-based, inclusive range of the items on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl fmt::Display for ItemRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} of {}", self.start, self.end, self.total)
    }
}

/// `max(1, ceil(total / size))`.
#[must_use]
pub fn total_pages(total: u64, size: u32) -> u32 {
    let size = u64::from(size.max(1));
    u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX).max(1)
}

/// Page numbers to show as buttons, at most [`PAGE_WINDOW`] of them.
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let (first, last) = if total <= PAGE_WINDOW {
        (1, total)
    } else if current <= 3 {
        (1, PAGE_WINDOW)
    } else if current >= total - 2 {
        (total - 4, total)
    } else {
        (current - 2, current + 2)
    };
    (first..=last).collect()
}

/// Paging state for a server-paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: PageSize,
    pub total_count: u64,
}

impl Pagination {
    #[must_use]
    pub const fn new(page: u32, size: PageSize, total_count: u64) -> Self {
        Self {
            page,
            size,
            total_count,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.size.value())
    }

    /// Range label for the current page. Informational only: results are
    /// already paginated by the server and are never sliced again.
    #[must_use]
    pub fn range(&self) -> ItemRange {
        if self.total_count == 0 {
            return ItemRange {
                start: 0,
                end: 0,
                total: 0,
            };
        }
        let size = u64::from(self.size.value());
        let page = u64::from(self.page.max(1));
        ItemRange {
            start: (page - 1) * size + 1,
            end: (page * size).min(self.total_count),
            total: self.total_count,
        }
    }

    #[must_use]
    pub fn window(&self) -> Vec<u32> {
        page_window(self.page, self.total_pages())
    }

    /// `page` clamped to `[1, total_pages]`.
    #[must_use]
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages())
    }

    #[must_use]
    pub fn next(&self) -> u32 {
        self.clamp(self.page.saturating_add(1))
    }

    #[must_use]
    pub fn previous(&self) -> u32 {
        self.clamp(self.page.saturating_sub(1))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 20, 1)]
    #[case(1, 20, 1)]
    #[case(20, 20, 1)]
    #[case(21, 20, 2)]
    #[case(95, 20, 5)]
    #[case(95, PAGE_SIZE_ALL, 1)]
    fn counts_pages(#[case] total: u64, #[case] size: u32, #[case] expected: u32) {
        assert_eq!(total_pages(total, size), expected);
    }

    #[rstest]
    #[case(1, 3, vec![1, 2, 3])]
    #[case(2, 5, vec![1, 2, 3, 4, 5])]
    #[case(3, 10, vec![1, 2, 3, 4, 5])]
    #[case(4, 10, vec![2, 3, 4, 5, 6])]
    #[case(8, 10, vec![6, 7, 8, 9, 10])]
    #[case(10, 10, vec![6, 7, 8, 9, 10])]
    #[case(12, 10, vec![6, 7, 8, 9, 10])]
    #[case(1, 20, vec![1, 2, 3, 4, 5])]
    #[case(10, 20, vec![8, 9, 10, 11, 12])]
    #[case(17, 20, vec![15, 16, 17, 18, 19])]
    #[case(20, 20, vec![16, 17, 18, 19, 20])]
    fn windows_page_buttons(#[case] current: u32, #[case] total: u32, #[case] expected: Vec<u32>) {
        assert_eq!(page_window(current, total), expected);
    }

    #[test]
    fn range_on_middle_and_last_page() {
        let pagination = Pagination::new(2, PageSize::Fixed(20), 45);
        assert_eq!(pagination.range().to_string(), "21 to 40 of 45");
        let last = Pagination::new(3, PageSize::Fixed(20), 45);
        assert_eq!(last.range().to_string(), "41 to 45 of 45");
    }

    #[test]
    fn empty_listing_reports_zero_range() {
        let pagination = Pagination::new(1, PageSize::Fixed(20), 0);
        assert_eq!(pagination.range().to_string(), "0 to 0 of 0");
        assert_eq!(pagination.total_pages(), 1);
    }

    #[test]
    fn navigation_is_clamped() {
        let first = Pagination::new(1, PageSize::Fixed(20), 45);
        assert_eq!(first.previous(), 1);
        assert_eq!(first.next(), 2);
        assert!(!first.has_previous());

        let last = Pagination::new(3, PageSize::Fixed(20), 45);
        assert_eq!(last.next(), 3);
        assert!(!last.has_next());
        assert_eq!(last.clamp(99), 3);
        assert_eq!(last.clamp(0), 1);
    }

    #[test]
    fn page_size_parsing_and_wire_value() {
        assert_eq!("all".parse::<PageSize>().unwrap(), PageSize::All);
        assert_eq!("40".parse::<PageSize>().unwrap(), PageSize::Fixed(40));
        assert_eq!("10000".parse::<PageSize>().unwrap(), PageSize::All);
        assert!("0".parse::<PageSize>().is_err());
        assert!("many".parse::<PageSize>().is_err());
        assert_eq!(PageSize::All.value(), 10_000);
        assert_eq!(serde_json::to_string(&PageSize::All).unwrap(), "10000");
        assert_eq!(
            serde_json::from_str::<PageSize>("100").unwrap(),
            PageSize::Fixed(100)
        );
    }
}
