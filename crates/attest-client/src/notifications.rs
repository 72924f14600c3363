//! Per-user notifications.

use attest_core::entities::Notification;
use attest_core::responses::{GeneratedNotifications, ListBody, Paginated, UnreadCount};
use serde_json::json;

use crate::request::pair;
use crate::{ApiClient, ApiRequest, error::ApiError};

impl ApiClient {
    /// Notifications, optionally narrowed to one user and read state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn notifications(
        &self,
        user_id: Option<u64>,
        is_read: Option<bool>,
    ) -> Result<Vec<Notification>, ApiError> {
        let mut query = Vec::new();
        if let Some(user) = user_id {
            query.push(pair("user_id", user));
        }
        if let Some(read) = is_read {
            query.push(pair("is_read", read));
        }
        let body: ListBody<Notification> = self
            .fetch(&ApiRequest::get("/notifications/").query(query))
            .await?;
        Ok(Paginated::from(body).results)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn unread_notifications(&self, user_id: u64) -> Result<Vec<Notification>, ApiError> {
        self.notifications(Some(user_id), Some(false)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn unread_count(&self, user_id: u64) -> Result<u64, ApiError> {
        let request = ApiRequest::get("/notifications/unread-count/")
            .query(vec![pair("user_id", user_id)]);
        let body: UnreadCount = self.fetch(&request).await?;
        Ok(body.unread_count)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn mark_notification_read(&self, id: u64) -> Result<(), ApiError> {
        self.run(&ApiRequest::post(format!("/notifications/{id}/mark-read/")))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn mark_all_notifications_read(&self, user_id: u64) -> Result<(), ApiError> {
        let request =
            ApiRequest::post("/notifications/mark-all-read/").json(&json!({ "user_id": user_id }))?;
        self.run(&request).await
    }

    /// Ask the backend to scan for due/overdue controls and create
    /// notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn generate_notifications(&self) -> Result<GeneratedNotifications, ApiError> {
        self.fetch(&ApiRequest::get("/notifications/generate/"))
            .await
    }
}
