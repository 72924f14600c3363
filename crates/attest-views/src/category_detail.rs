//! Helpers for the control detail page: status badge, last upload, and the
//! evidence-submission preconditions.

use attest_client::{ApiClient, EvidenceUpload, UploadFile};
use attest_core::entities::{Category, CategoryDetail, Submission};
use attest_core::enums::SubmissionStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::ViewError;

/// Badge text for a control's current submission.
#[must_use]
pub fn status_badge(submission: Option<&Submission>) -> String {
    let Some(submission) = submission else {
        return "No Active Submission".to_string();
    };
    if submission.is_overdue {
        return "Overdue".to_string();
    }
    match submission.status {
        SubmissionStatus::Approved => "Approved".to_string(),
        SubmissionStatus::Submitted | SubmissionStatus::UnderReview => {
            "Pending Approval".to_string()
        }
        SubmissionStatus::Pending | SubmissionStatus::Rejected => {
            format!("Pending ({} days left)", submission.days_until_due)
        }
    }
}

/// Newest file upload, else the submission time.
#[must_use]
pub fn last_upload(submission: Option<&Submission>) -> Option<DateTime<Utc>> {
    submission.and_then(Submission::last_uploaded_at)
}

/// Flattened view of a control for list and detail output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySummary {
    pub id: u64,
    pub name: String,
    pub review_period: String,
    pub group: String,
    pub assignee: String,
    pub approver: String,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub last_upload: Option<DateTime<Utc>>,
    pub files: usize,
    pub hidden: bool,
}

impl CategorySummary {
    #[must_use]
    pub fn of(category: &Category) -> Self {
        let current = category.current_submission.as_ref();
        Self {
            id: category.id,
            name: category.name.clone(),
            review_period: category.review_period.label().to_string(),
            group: category.category_group.label().to_string(),
            assignee: category.assignee_label(),
            approver: category
                .approver
                .as_ref()
                .map_or_else(|| "Not assigned".to_string(), |user| user.display_name()),
            status: status_badge(current),
            due_date: current.map(|submission| submission.due_date),
            last_upload: last_upload(current),
            files: current.map_or(0, |submission| submission.files.len()),
            hidden: !category.is_active,
        }
    }
}

/// Detail page payload: the summary plus history counts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryOverview {
    #[serde(flatten)]
    pub summary: CategorySummary,
    pub description: String,
    pub evidence_requirements: String,
    pub past_submissions: usize,
}

impl CategoryOverview {
    #[must_use]
    pub fn of(detail: &CategoryDetail) -> Self {
        Self {
            summary: CategorySummary::of(&detail.category),
            description: detail.category.description.clone(),
            evidence_requirements: detail.category.evidence_requirements.clone(),
            past_submissions: detail.past_submissions.len(),
        }
    }
}

/// What the user picked in the submit dialog.
#[derive(Debug, Clone, Default)]
pub struct EvidenceDraft {
    pub files: Vec<UploadFile>,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Check that evidence can be submitted for `category` and build the upload.
/// Returns the target submission id with the upload.
///
/// The due date defaults to the review period's recommendation from `today`.
///
/// # Errors
///
/// Returns [`ViewError::InvalidInput`] when there is no open submission, the
/// submission does not accept evidence, or no file was chosen.
pub fn prepare_submission(
    category: &Category,
    draft: EvidenceDraft,
    today: NaiveDate,
) -> Result<(u64, EvidenceUpload), ViewError> {
    let submission = category.current_submission.as_ref().ok_or_else(|| {
        ViewError::InvalidInput(format!("'{}' has no active submission", category.name))
    })?;
    if !submission.status.accepts_evidence() {
        return Err(ViewError::InvalidInput(format!(
            "submission {} is {} and does not accept evidence",
            submission.id,
            submission.status.as_str()
        )));
    }
    if draft.files.is_empty() {
        return Err(ViewError::InvalidInput(
            "select at least one file to upload".to_string(),
        ));
    }
    let due_date = draft
        .due_date
        .unwrap_or_else(|| category.review_period.recommended_due_date(today));
    Ok((
        submission.id,
        EvidenceUpload {
            files: draft.files,
            notes: draft.notes,
            due_date: Some(due_date),
        },
    ))
}

/// Validate and upload evidence for `category`.
///
/// # Errors
///
/// See [`prepare_submission`]; API failures surface as [`ViewError::Api`].
pub async fn submit_evidence(
    client: &ApiClient,
    category: &Category,
    draft: EvidenceDraft,
    today: NaiveDate,
) -> Result<Submission, ViewError> {
    let (id, upload) = prepare_submission(category, draft, today)?;
    tracing::debug!(submission = id, files = upload.files.len(), "submitting evidence");
    Ok(client.submit_evidence(id, &upload).await?)
}
