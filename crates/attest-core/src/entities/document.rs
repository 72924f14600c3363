use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::UserRef;

/// Evidence file as listed by the documents endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Document {
    pub id: u64,
    pub filename: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub google_drive_file_id: Option<String>,
    #[serde(default)]
    pub google_drive_file_url: Option<String>,
    pub file_size: u64,
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub uploaded_by: Option<UserRef>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub submission_id: Option<u64>,
}

/// Files uploaded on one calendar day, bucketed by uploader.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DocumentDay {
    pub date: NaiveDate,
    pub users: Vec<UploaderFiles>,
}

impl DocumentDay {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.users.iter().map(|bucket| bucket.files.len()).sum()
    }
}

/// One uploader's files inside a [`DocumentDay`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploaderFiles {
    pub user: UserRef,
    pub files: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grouped_day_tolerates_deleted_uploader() {
        let day: DocumentDay = serde_json::from_value(json!({
            "date": "2025-03-04",
            "users": [
                {
                    "user": {"id": null, "username": "ghost", "email": null},
                    "files": [{
                        "id": 9, "filename": "log.txt", "file_size": 3,
                        "mime_type": "text/plain", "uploaded_at": "2025-03-04T10:00:00Z"
                    }]
                },
                {"user": {"id": 3, "username": "ana"}, "files": []}
            ]
        }))
        .unwrap();
        assert_eq!(day.users[0].user.id, None);
        assert_eq!(day.file_count(), 1);
    }
}
