//! State for the documents page: filters, the file list, and the uploader
//! choices derived from it.

use attest_client::{ApiClient, ApiError, DocumentQuery, distinct_uploaders};
use attest_core::entities::{Document, DocumentDay, UserRef};
use chrono::NaiveDate;

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[derive(Debug, Clone, Default)]
pub struct DocumentBrowser {
    filters: DocumentQuery,
    documents: Vec<Document>,
    days: Vec<DocumentDay>,
    uploaders: Vec<UserRef>,
    error: Option<String>,
}

impl DocumentBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn filters(&self) -> &DocumentQuery {
        &self.filters
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn days(&self) -> &[DocumentDay] {
        &self.days
    }

    /// Uploaders seen in the unfiltered file list, first-seen order.
    #[must_use]
    pub fn uploaders(&self) -> &[UserRef] {
        &self.uploaders
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn set_uploaded_by(&mut self, user: Option<u64>) -> bool {
        replace(&mut self.filters.uploaded_by, user)
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) -> bool {
        replace(&mut self.filters.date_from, date)
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) -> bool {
        replace(&mut self.filters.date_to, date)
    }

    pub fn set_category(&mut self, category: Option<u64>) -> bool {
        replace(&mut self.filters.category, category)
    }

    pub fn clear_filters(&mut self) -> bool {
        replace(&mut self.filters, DocumentQuery::default())
    }

    /// Record a flat listing. The uploader choices only come from
    /// unfiltered listings so narrowing by one person keeps the others
    /// selectable.
    pub fn apply_documents(&mut self, result: Result<Vec<Document>, ApiError>) {
        match result {
            Ok(documents) => {
                if self.filters.active_count() == 0 {
                    self.uploaders = distinct_uploaders(&documents);
                }
                self.documents = documents;
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load documents");
                self.error = Some(error.user_message());
            }
        }
    }

    pub fn apply_days(&mut self, result: Result<Vec<DocumentDay>, ApiError>) {
        match result {
            Ok(days) => {
                self.days = days;
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load grouped documents");
                self.error = Some(error.user_message());
            }
        }
    }

    pub async fn refresh(&mut self, client: &ApiClient) {
        let result = client.documents(&self.filters).await;
        self.apply_documents(result);
    }

    pub async fn refresh_days(&mut self, client: &ApiClient) {
        let result = client.grouped_documents(&self.filters).await;
        self.apply_days(result);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn doc(id: u64, uploader: (u64, &str)) -> Document {
        serde_json::from_value(json!({
            "id": id,
            "filename": format!("file-{id}.pdf"),
            "file_size": 10,
            "mime_type": "application/pdf",
            "uploaded_at": "2025-03-04T10:00:00Z",
            "uploaded_by": {"id": uploader.0, "username": uploader.1}
        }))
        .unwrap()
    }

    #[test]
    fn filter_setters_report_changes() {
        let mut browser = DocumentBrowser::new();
        assert!(browser.set_uploaded_by(Some(3)));
        assert!(!browser.set_uploaded_by(Some(3)));
        assert!(browser.set_date_from(NaiveDate::from_ymd_opt(2025, 1, 1)));
        assert_eq!(browser.active_filter_count(), 2);
        assert!(browser.clear_filters());
        assert_eq!(browser.active_filter_count(), 0);
    }

    #[test]
    fn uploaders_come_from_unfiltered_listing() {
        let mut browser = DocumentBrowser::new();
        browser.apply_documents(Ok(vec![doc(1, (3, "ana")), doc(2, (4, "bo")), doc(3, (3, "ana"))]));
        let names: Vec<_> = browser.uploaders().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["ana", "bo"]);

        browser.set_uploaded_by(Some(4));
        browser.apply_documents(Ok(vec![doc(2, (4, "bo"))]));
        assert_eq!(browser.documents().len(), 1);
        assert_eq!(browser.uploaders().len(), 2);
    }

    #[test]
    fn failure_keeps_previous_documents() {
        let mut browser = DocumentBrowser::new();
        browser.apply_documents(Ok(vec![doc(1, (3, "ana"))]));
        browser.apply_documents(Err(ApiError::Server {
            status: 500,
            message: "boom".into(),
        }));
        assert_eq!(browser.documents().len(), 1);
        assert_eq!(browser.error(), Some("boom"));
    }
}
