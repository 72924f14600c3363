use attest_core::entities::{
    Analytics, Category, CategoryDetail, CategoryGroup, DashboardStats, Document, DocumentDay,
    Notification, ReviewOutcome, Submission, User, UserRef,
};
use attest_core::responses::{FileReviewOutcome, GeneratedNotifications};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `attest schema`.
pub const TYPE_NAMES: [&str; 14] = [
    "analytics",
    "category",
    "category-detail",
    "category-group",
    "dashboard",
    "document",
    "document-day",
    "file-review",
    "generated-notifications",
    "notification",
    "review-outcome",
    "submission",
    "user",
    "user-ref",
];

fn schema_named(name: &str) -> Option<Schema> {
    let schema = match name {
        "analytics" => schema_for!(Analytics),
        "category" => schema_for!(Category),
        "category-detail" => schema_for!(CategoryDetail),
        "category-group" => schema_for!(CategoryGroup),
        "dashboard" => schema_for!(DashboardStats),
        "document" => schema_for!(Document),
        "document-day" => schema_for!(DocumentDay),
        "file-review" => schema_for!(FileReviewOutcome),
        "generated-notifications" => schema_for!(GeneratedNotifications),
        "notification" => schema_for!(Notification),
        "review-outcome" => schema_for!(ReviewOutcome),
        "submission" => schema_for!(Submission),
        "user" => schema_for!(User),
        "user-ref" => schema_for!(UserRef),
        _ => return None,
    };
    Some(schema)
}

/// Handle `attest schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let name = args.type_name.trim().to_ascii_lowercase().replace('_', "-");
    let Some(schema) = schema_named(&name) else {
        anyhow::bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPE_NAMES {
            assert!(schema_named(name).is_some(), "{name}");
        }
        assert!(schema_named("widget").is_none());
    }

    #[test]
    fn category_schema_names_its_fields() {
        let schema = serde_json::to_value(schema_named("category").unwrap()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("review_period"));
        assert!(properties.contains_key("current_submission"));
    }
}
