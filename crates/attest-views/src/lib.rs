//! # attest-views
//!
//! Front-end state that sits between user input and the API client: the
//! control listing (filters, debounced search, paging, stale-response
//! handling), persisted display preferences, control detail helpers, the
//! documents and groups pages, and the notification inbox with its poller.
//!
//! Nothing here renders. The CLI (and any future TUI) drives these types and
//! decides how to show them.

pub mod category_detail;
pub mod category_list;
pub mod debounce;
pub mod documents;
pub mod error;
pub mod filters;
pub mod groups;
pub mod notifications;
pub mod pagination;
pub mod preferences;

pub use category_list::{CategoryList, FetchTicket};
pub use debounce::Debouncer;
pub use error::ViewError;
pub use filters::CategoryFilters;
pub use notifications::{Inbox, NotificationPoller};
pub use pagination::{ItemRange, PageSize, Pagination};
pub use preferences::{PreferenceStore, Preferences};
