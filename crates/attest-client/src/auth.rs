//! Session endpoints under `/auth/`.

use attest_core::entities::{ProfileUpdate, User};
use attest_core::responses::{
    AuthorizationUrl, CurrentUserResponse, GoogleCallbackResponse, UserResponse,
};
use serde_json::json;

use crate::{ApiClient, ApiRequest, error::ApiError, request::LOGIN_PATH};

impl ApiClient {
    /// Authenticate with an email address or username.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the credentials are
    /// rejected.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<UserResponse, ApiError> {
        let request = ApiRequest::post(LOGIN_PATH).json(&json!({
            "email": identifier,
            "password": password,
        }))?;
        self.fetch(&request).await
    }

    /// End the server-side session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.run(&ApiRequest::post("/auth/logout/")).await
    }

    /// Current user, or `None` when the backend reports no session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] on 401 and other [`ApiError`]s on
    /// failure.
    pub async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let body: CurrentUserResponse = self.fetch(&ApiRequest::get("/auth/me/")).await?;
        Ok(body.user)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the current password is
    /// rejected.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let request = ApiRequest::post("/auth/change-password/").json(&json!({
            "current_password": current_password,
            "new_password": new_password,
        }))?;
        self.run(&request).await
    }

    /// Update name/email. Only the fields set in `update` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the update is rejected.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let request = ApiRequest::patch("/auth/update-profile/").json(update)?;
        let body: UserResponse = self.fetch(&request).await?;
        Ok(body.user)
    }

    /// URL that starts the Google sign-in flow.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn google_auth_url(&self) -> Result<AuthorizationUrl, ApiError> {
        self.fetch(&ApiRequest::get("/auth/google/initiate/")).await
    }

    /// Exchange a Google authorization code for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the code is rejected.
    pub async fn google_callback(&self, code: &str) -> Result<GoogleCallbackResponse, ApiError> {
        let request =
            ApiRequest::post("/auth/google/callback/").json(&json!({ "code": code }))?;
        self.fetch(&request).await
    }
}
