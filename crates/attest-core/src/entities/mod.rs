//! Entity structs for the evidence backend's resources.
//!
//! Field names follow the REST payloads verbatim so the structs deserialize
//! straight from response bodies. All structs derive `JsonSchema` so the CLI
//! can publish the shape of its JSON output.

mod analytics;
mod category;
mod document;
mod notification;
mod submission;
mod user;

pub use analytics::{
    Analytics, BottleneckApprover, ComplianceTrend, DashboardStats, GroupCompliance,
    OverdueAging, PriorityIssue, SubmissionTrendPoint, UpcomingDeadline,
};
pub use category::{Category, CategoryDetail, CategoryDraft, CategoryGroup, CategoryPatch};
pub use document::{Document, DocumentDay, UploaderFiles};
pub use notification::Notification;
pub use submission::{Comment, EvidenceFile, ReviewOutcome, Submission};
pub use user::{ProfileUpdate, User, UserRef, display_name};
