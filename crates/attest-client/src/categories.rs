//! Controls (`/categories/`), their groups, and the export download.

use attest_core::entities::{
    Category, CategoryDetail, CategoryDraft, CategoryGroup, CategoryPatch, Submission, UserRef,
};
use attest_core::enums::{CategoryGroupCode, ExportFormat, ReviewPeriod, StatusFilter};
use attest_core::responses::{ListBody, Paginated};
use serde_json::Value;

use crate::request::pair;
use crate::{ApiClient, ApiRequest, error::ApiError, http::error_message};

/// Page size requesting every control in one page.
pub const PAGE_SIZE_ALL: u32 = 10_000;

/// Filters and paging for `GET /categories/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub search: Option<String>,
    pub review_period: Option<ReviewPeriod>,
    pub status: Option<StatusFilter>,
    pub assignee: Option<String>,
    pub category_group: Option<CategoryGroupCode>,
    pub show_hidden: bool,
    pub show_all: bool,
    pub page: u32,
    pub page_size: u32,
}

impl Default for CategoryQuery {
    fn default() -> Self {
        Self {
            search: None,
            review_period: None,
            status: None,
            assignee: None,
            category_group: None,
            show_hidden: false,
            show_all: false,
            page: 1,
            page_size: 20,
        }
    }
}

impl CategoryQuery {
    /// Query-string pairs. Hidden controls are either included
    /// (`show_hidden=true`) or explicitly excluded (`active_only=true`).
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if self.show_hidden {
            pairs.push(pair("show_hidden", "true"));
        } else {
            pairs.push(pair("active_only", "true"));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(pair("search", search));
        }
        if let Some(period) = self.review_period {
            pairs.push(pair("review_period", period.as_str()));
        }
        if let Some(status) = self.status {
            pairs.push(pair("status", status.as_str()));
        }
        if let Some(assignee) = self.assignee.as_deref().filter(|a| !a.is_empty()) {
            pairs.push(pair("assignee", assignee));
        }
        if let Some(group) = self.category_group {
            pairs.push(pair("category_group", group.as_str()));
        }
        if self.show_all {
            pairs.push(pair("show_all", "true"));
        }
        pairs.push(pair("page", self.page.max(1)));
        pairs.push(pair("page_size", self.page_size.max(1)));
        pairs
    }
}

impl ApiClient {
    /// One page of controls.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<Paginated<Category>, ApiError> {
        let request = ApiRequest::get("/categories/").query(query.query_pairs());
        let body: ListBody<Category> = self.fetch(&request).await?;
        Ok(body.into())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the control does not exist.
    pub async fn category(&self, id: u64) -> Result<CategoryDetail, ApiError> {
        self.fetch(&ApiRequest::get(format!("/categories/{id}/")))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the draft is rejected.
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        let request = ApiRequest::post("/categories/").json(draft)?;
        self.fetch(&request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the patch is rejected.
    pub async fn update_category(
        &self,
        id: u64,
        patch: &CategoryPatch,
    ) -> Result<Category, ApiError> {
        let request = ApiRequest::patch(format!("/categories/{id}/")).json(patch)?;
        self.fetch(&request).await
    }

    /// Mark a control inactive.
    ///
    /// # Errors
    ///
    /// See [`Self::update_category`].
    pub async fn hide_category(&self, id: u64) -> Result<Category, ApiError> {
        self.update_category(id, &CategoryPatch::visibility(false))
            .await
    }

    /// # Errors
    ///
    /// See [`Self::update_category`].
    pub async fn unhide_category(&self, id: u64) -> Result<Category, ApiError> {
        self.update_category(id, &CategoryPatch::visibility(true))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        self.run(&ApiRequest::delete(format!("/categories/{id}/")))
            .await
    }

    /// Every submission cycle recorded for a control.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn category_submissions(&self, id: u64) -> Result<Vec<Submission>, ApiError> {
        let body: ListBody<Submission> = self
            .fetch(&ApiRequest::get(format!("/categories/{id}/submissions/")))
            .await?;
        Ok(Paginated::from(body).results)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn category_groups(&self, show_hidden: bool) -> Result<Vec<CategoryGroup>, ApiError> {
        let request = ApiRequest::get("/categories/groups/")
            .query(vec![pair("show_hidden", show_hidden)]);
        self.fetch(&request).await
    }

    /// Users that can be assigned as assignee or approver.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn assignable_users(&self) -> Result<Vec<UserRef>, ApiError> {
        self.fetch(&ApiRequest::get("/categories/users/")).await
    }

    /// Download the control export as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Export`] when the backend answers with a JSON error
    /// document instead of a file, and other [`ApiError`]s on failure.
    pub async fn export_categories(
        &self,
        format: ExportFormat,
        show_hidden: bool,
    ) -> Result<Vec<u8>, ApiError> {
        let mut query = vec![pair("format", format.as_str())];
        if show_hidden {
            query.push(pair("show_hidden", "true"));
        }
        let resp = self
            .execute(&ApiRequest::get("/categories/export/").query(query))
            .await?;

        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let bytes = resp.bytes().await?;
        if is_json {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            let message =
                error_message(body.as_ref()).unwrap_or_else(|| "Failed to export data".into());
            return Err(ApiError::Export(message));
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_query_excludes_hidden() {
        let pairs = CategoryQuery::default().query_pairs();
        assert_eq!(
            pairs,
            vec![
                pair("active_only", "true"),
                pair("page", 1),
                pair("page_size", 20),
            ]
        );
    }

    #[test]
    fn full_query_maps_every_dimension() {
        let query = CategoryQuery {
            search: Some("  backup ".into()),
            review_period: Some(ReviewPeriod::Quarterly),
            status: Some(StatusFilter::NoSubmission),
            assignee: Some("me".into()),
            category_group: Some(CategoryGroupCode::BackupRecovery),
            show_hidden: true,
            show_all: true,
            page: 3,
            page_size: PAGE_SIZE_ALL,
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                pair("show_hidden", "true"),
                pair("search", "backup"),
                pair("review_period", "QUARTERLY"),
                pair("status", "no-submission"),
                pair("assignee", "me"),
                pair("category_group", "BACKUP_RECOVERY"),
                pair("show_all", "true"),
                pair("page", 3),
                pair("page_size", 10_000),
            ]
        );
    }

    #[test]
    fn blank_search_is_omitted() {
        let query = CategoryQuery {
            search: Some("   ".into()),
            ..CategoryQuery::default()
        };
        assert!(!query.query_pairs().iter().any(|(k, _)| k == "search"));
    }
}
