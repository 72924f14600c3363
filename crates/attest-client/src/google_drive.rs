//! Google Drive authorization hand-off. The OAuth exchange itself happens on
//! the backend.

use attest_core::responses::{AuthorizationUrl, DriveCallbackResponse};

use crate::{ApiClient, ApiRequest, error::ApiError};

impl ApiClient {
    /// URL the user visits to grant Drive access.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn drive_auth_url(&self) -> Result<AuthorizationUrl, ApiError> {
        self.fetch(&ApiRequest::get("/upload/auth/")).await
    }

    /// Complete the Drive authorization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn drive_callback(&self) -> Result<DriveCallbackResponse, ApiError> {
        self.fetch(&ApiRequest::get("/upload/auth/callback/")).await
    }
}
