//! Uploaded evidence files (`/files/`).

use attest_core::entities::{Document, DocumentDay, UserRef};
use attest_core::responses::{ListBody, Paginated};
use chrono::NaiveDate;

use crate::request::pair;
use crate::{ApiClient, ApiRequest, error::ApiError};

/// Filters shared by the flat and grouped document listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub uploaded_by: Option<u64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub category: Option<u64>,
}

impl DocumentQuery {
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(user) = self.uploaded_by {
            pairs.push(pair("uploaded_by", user));
        }
        if let Some(from) = self.date_from {
            pairs.push(pair("date_from", from.format("%Y-%m-%d")));
        }
        if let Some(to) = self.date_to {
            pairs.push(pair("date_to", to.format("%Y-%m-%d")));
        }
        if let Some(category) = self.category {
            pairs.push(pair("category", category));
        }
        pairs
    }

    /// Number of filters currently set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.uploaded_by.is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
            self.category.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Distinct uploaders of `documents`, in first-seen order.
#[must_use]
pub fn distinct_uploaders(documents: &[Document]) -> Vec<UserRef> {
    let mut seen: Vec<UserRef> = Vec::new();
    for user in documents.iter().filter_map(|doc| doc.uploaded_by.as_ref()) {
        let duplicate = seen.iter().any(|known| match (known.id, user.id) {
            (Some(a), Some(b)) => a == b,
            _ => known.username == user.username,
        });
        if !duplicate {
            seen.push(user.clone());
        }
    }
    seen
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn documents(&self, query: &DocumentQuery) -> Result<Vec<Document>, ApiError> {
        let request = ApiRequest::get("/files/").query(query.query_pairs());
        let body: ListBody<Document> = self.fetch(&request).await?;
        Ok(Paginated::from(body).results)
    }

    /// Documents bucketed by upload day, then uploader.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn grouped_documents(
        &self,
        query: &DocumentQuery,
    ) -> Result<Vec<DocumentDay>, ApiError> {
        let request = ApiRequest::get("/files/grouped/").query(query.query_pairs());
        self.fetch(&request).await
    }

    /// Everyone who has uploaded at least one file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn uploaders(&self) -> Result<Vec<UserRef>, ApiError> {
        let documents = self.documents(&DocumentQuery::default()).await?;
        Ok(distinct_uploaders(&documents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn doc(id: u64, uploader: Option<(u64, &str)>) -> Document {
        Document {
            id,
            filename: format!("f{id}.pdf"),
            file_url: None,
            google_drive_file_id: None,
            google_drive_file_url: None,
            file_size: 1,
            mime_type: "application/pdf".into(),
            uploaded_at: Utc::now(),
            uploaded_by: uploader.map(|(uid, name)| UserRef {
                id: Some(uid),
                username: name.into(),
                email: None,
                first_name: None,
                last_name: None,
            }),
            category_name: None,
            submission_id: None,
        }
    }

    #[test]
    fn uploaders_are_distinct_in_first_seen_order() {
        let docs = vec![
            doc(1, Some((7, "zoe"))),
            doc(2, Some((3, "amir"))),
            doc(3, None),
            doc(4, Some((7, "zoe"))),
        ];
        let names: Vec<String> = distinct_uploaders(&docs)
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["zoe", "amir"]);
    }

    #[test]
    fn active_count_counts_set_filters() {
        let query = DocumentQuery {
            uploaded_by: Some(3),
            date_to: NaiveDate::from_ymd_opt(2025, 5, 1),
            ..DocumentQuery::default()
        };
        assert_eq!(query.active_count(), 2);
        assert_eq!(
            query.query_pairs(),
            vec![pair("uploaded_by", 3), pair("date_to", "2025-05-01")]
        );
        assert_eq!(DocumentQuery::default().active_count(), 0);
    }
}
