//! Evidence submissions, review decisions, and the aggregate views.

use attest_core::entities::{Analytics, DashboardStats, ReviewOutcome, Submission};
use attest_core::enums::SubmissionStatus;
use attest_core::responses::{FileReviewOutcome, ListBody, Paginated};
use chrono::NaiveDate;
use serde_json::json;

use crate::request::{FormField, UploadFile, pair};
use crate::{ApiClient, ApiRequest, error::ApiError};

/// Filters for `GET /submissions/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionQuery {
    pub category: Option<u64>,
    pub status: Option<SubmissionStatus>,
}

impl SubmissionQuery {
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(pair("category", category));
        }
        if let Some(status) = self.status {
            pairs.push(pair("status", status.as_str()));
        }
        pairs
    }
}

/// Files and metadata for `POST /submissions/{id}/submit/`.
#[derive(Debug, Clone, Default)]
pub struct EvidenceUpload {
    pub files: Vec<UploadFile>,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl EvidenceUpload {
    /// Multipart fields: one `files` part per file, then `notes` and
    /// `due_date` (`YYYY-MM-DD`) when set.
    #[must_use]
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut fields: Vec<FormField> = self
            .files
            .iter()
            .map(|file| FormField::File {
                name: "files".to_string(),
                file: file.clone(),
            })
            .collect();
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            fields.push(FormField::Text {
                name: "notes".to_string(),
                value: notes.to_string(),
            });
        }
        if let Some(due) = self.due_date {
            fields.push(FormField::Text {
                name: "due_date".to_string(),
                value: due.format("%Y-%m-%d").to_string(),
            });
        }
        fields
    }

    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(UploadFile::size).sum()
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_submissions(
        &self,
        query: &SubmissionQuery,
    ) -> Result<Vec<Submission>, ApiError> {
        let request = ApiRequest::get("/submissions/").query(query.query_pairs());
        let body: ListBody<Submission> = self.fetch(&request).await?;
        Ok(Paginated::from(body).results)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the submission does not
    /// exist.
    pub async fn submission(&self, id: u64) -> Result<Submission, ApiError> {
        self.fetch(&ApiRequest::get(format!("/submissions/{id}/")))
            .await
    }

    /// Upload evidence for a submission cycle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the upload fails or the backend rejects it.
    pub async fn submit_evidence(
        &self,
        id: u64,
        upload: &EvidenceUpload,
    ) -> Result<Submission, ApiError> {
        let request =
            ApiRequest::post(format!("/submissions/{id}/submit/")).multipart(upload.form_fields());
        self.fetch(&request).await
    }

    /// Approve a submission; the outcome reports the Drive upload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the transition is refused.
    pub async fn approve_submission(
        &self,
        id: u64,
        review_notes: Option<&str>,
    ) -> Result<ReviewOutcome, ApiError> {
        let request = ApiRequest::post(format!("/submissions/{id}/approve/"))
            .json(&json!({ "review_notes": review_notes }))?;
        self.fetch(&request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the transition is refused.
    pub async fn reject_submission(
        &self,
        id: u64,
        review_notes: &str,
    ) -> Result<Submission, ApiError> {
        let request = ApiRequest::post(format!("/submissions/{id}/reject/"))
            .json(&json!({ "review_notes": review_notes }))?;
        self.fetch(&request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn approve_file(
        &self,
        file_id: u64,
        review_notes: Option<&str>,
    ) -> Result<FileReviewOutcome, ApiError> {
        let request = ApiRequest::post(format!("/files/{file_id}/approve/"))
            .json(&json!({ "review_notes": review_notes }))?;
        self.fetch(&request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn reject_file(
        &self,
        file_id: u64,
        review_notes: &str,
    ) -> Result<FileReviewOutcome, ApiError> {
        let request = ApiRequest::post(format!("/files/{file_id}/reject/"))
            .json(&json!({ "review_notes": review_notes }))?;
        self.fetch(&request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.fetch(&ApiRequest::get("/submissions/dashboard/")).await
    }

    /// Analytics, optionally restricted to the caller's own assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn analytics(&self, my_assignments: bool) -> Result<Analytics, ApiError> {
        let mut request = ApiRequest::get("/submissions/analytics/");
        if my_assignments {
            request = request.query(vec![pair("my_assignments", "true")]);
        }
        self.fetch(&request).await
    }
}
