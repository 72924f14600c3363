pub mod auth;
pub mod categories;
pub mod dispatch;
pub mod drive;
pub mod files;
pub mod notifications;
pub mod prefs;
pub mod reports;
pub mod schema;
pub mod shared;
pub mod submissions;
