use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::UserRef;
use crate::enums::SubmissionStatus;

/// One evidence-gathering cycle for a control.
///
/// `files` and `comments` arrive in server order and are treated as
/// append-only; display code sorts copies, never the vectors themselves.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Submission {
    pub id: u64,
    pub category: u64,
    #[serde(default)]
    pub category_name: String,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub submitted_by: Option<UserRef>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_by: Option<UserRef>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submission_notes: String,
    #[serde(default)]
    pub review_notes: String,
    #[serde(default)]
    pub files: Vec<EvidenceFile>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub days_until_due: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// Most recent evidence timestamp: the newest file upload, falling back to
    /// the submission time.
    #[must_use]
    pub fn last_uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.files
            .iter()
            .map(|file| file.uploaded_at)
            .max()
            .or(self.submitted_at)
    }

    /// Files ordered newest first, without touching the stored order.
    #[must_use]
    pub fn files_newest_first(&self) -> Vec<&EvidenceFile> {
        let mut files: Vec<&EvidenceFile> = self.files.iter().collect();
        files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        files
    }
}

/// An uploaded evidence file attached to a submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvidenceFile {
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
}

impl EvidenceFile {
    /// Best link to the file: the Drive copy when uploaded, else the local URL.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.google_drive_file_url
            .as_deref()
            .or(self.file_url.as_deref())
    }
}

/// A reviewer or submitter comment on a submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub user: UserRef,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Approval response: the updated submission plus the Drive upload report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReviewOutcome {
    #[serde(flatten)]
    pub submission: Submission,
    #[serde(default)]
    pub upload_status: Option<String>,
    #[serde(default)]
    pub upload_warning: Option<String>,
    #[serde(default)]
    pub upload_errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "id": 12,
        "category": 4,
        "category_name": "Firewall review",
        "period_start_date": "2025-01-01",
        "period_end_date": "2025-01-31",
        "due_date": "2025-02-05",
        "status": "SUBMITTED",
        "submitted_at": "2025-02-01T09:00:00Z",
        "files": [
            {"id": 1, "filename": "a.pdf", "file_size": 10, "mime_type": "application/pdf",
             "uploaded_at": "2025-01-30T08:00:00Z"},
            {"id": 2, "filename": "b.png", "file_size": 20, "mime_type": "image/png",
             "uploaded_at": "2025-02-01T08:30:00Z",
             "google_drive_file_url": "https://drive.example/b"}
        ],
        "comments": [],
        "is_overdue": false,
        "days_until_due": 4,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-02-01T09:00:00Z"
    }"#;

    #[test]
    fn last_upload_uses_newest_file() {
        let submission: Submission = serde_json::from_str(FIXTURE).unwrap();
        let last = submission.last_uploaded_at().unwrap();
        assert_eq!(last.to_rfc3339(), "2025-02-01T08:30:00+00:00");
    }

    #[test]
    fn last_upload_falls_back_to_submitted_at() {
        let mut submission: Submission = serde_json::from_str(FIXTURE).unwrap();
        submission.files.clear();
        assert_eq!(submission.last_uploaded_at(), submission.submitted_at);
    }

    #[test]
    fn newest_first_leaves_stored_order_alone() {
        let submission: Submission = serde_json::from_str(FIXTURE).unwrap();
        let sorted: Vec<u64> = submission.files_newest_first().iter().map(|f| f.id).collect();
        assert_eq!(sorted, vec![2, 1]);
        assert_eq!(submission.files[0].id, 1);
    }

    #[test]
    fn file_link_prefers_drive() {
        let submission: Submission = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(submission.files[1].link(), Some("https://drive.example/b"));
        assert_eq!(submission.files[0].link(), None);
    }
}
