mod auth;
mod categories;
mod drive;
mod files;
mod notifications;
mod prefs;
mod submissions;

pub use auth::{AuthCommands, AuthLoginArgs, AuthPasswordArgs, AuthProfileArgs};
pub use categories::{
    CategoryCommands, CategoryCreateArgs, CategoryExportArgs, CategoryListArgs,
    CategoryUpdateArgs,
};
pub use drive::DriveCommands;
pub use files::{FileCommands, FileListArgs};
pub use notifications::NotificationCommands;
pub use prefs::PrefsCommands;
pub use submissions::{SubmissionCommands, SubmitArgs};
