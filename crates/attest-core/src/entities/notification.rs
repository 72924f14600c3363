use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NotificationKind;

/// A per-user notification about a control or submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub notification_type: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub submission: Option<u64>,
    #[serde(default)]
    pub submission_id: Option<u64>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Control this notification points at, if any.
    #[must_use]
    pub const fn target_category(&self) -> Option<u64> {
        match self.category_id {
            Some(id) => Some(id),
            None => self.category,
        }
    }
}
