use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Submission, UserRef};
use crate::enums::{CategoryGroupCode, ReviewPeriod};

const fn uncategorized() -> CategoryGroupCode {
    CategoryGroupCode::Uncategorized
}

/// A compliance control that requires periodic evidence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evidence_requirements: String,
    pub review_period: ReviewPeriod,
    #[serde(default = "uncategorized")]
    pub category_group: CategoryGroupCode,
    #[serde(default)]
    pub google_drive_folder_id: String,
    #[serde(default)]
    pub assigned_reviewers: Vec<UserRef>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub approver: Option<UserRef>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(default)]
    pub current_submission: Option<Submission>,
    #[serde(default)]
    pub compliance_score: Option<f64>,
}

impl Category {
    /// Assignee display name, or `"Not assigned"`.
    #[must_use]
    pub fn assignee_label(&self) -> String {
        self.assignee
            .as_ref()
            .map_or_else(|| "Not assigned".to_string(), UserRef::display_name)
    }
}

/// `GET /categories/{id}/` payload: the control plus its submission history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub past_submissions: Vec<Submission>,
}

/// A control group with its aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryGroup {
    pub code: CategoryGroupCode,
    pub label: String,
    pub count: u64,
    #[serde(default)]
    pub compliance_score: Option<f64>,
    #[serde(default)]
    pub pending_evidence_count: Option<u64>,
}

/// Body of `POST /categories/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub evidence_requirements: String,
    pub review_period: ReviewPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_group: Option<CategoryGroupCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<u64>,
}

/// Body of `PATCH /categories/{id}/`. Only set fields are sent;
/// `Some(None)` on an assignment clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_period: Option<ReviewPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_group: Option<CategoryGroupCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    /// Patch that only toggles visibility (hide / unhide).
    #[must_use]
    pub fn visibility(active: bool) -> Self {
        Self {
            is_active: Some(active),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
