//! Response envelopes returned by the backend and echoed by `attest` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::User;

/// Page of results from a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap a bare array response as a single complete page.
    #[must_use]
    pub fn from_items(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

/// Either shape a list endpoint may answer with.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Page(Paginated<T>),
    Items(Vec<T>),
}

impl<T> From<ListBody<T>> for Paginated<T> {
    fn from(body: ListBody<T>) -> Self {
        match body {
            ListBody::Page(page) => page,
            ListBody::Items(items) => Self::from_items(items),
        }
    }
}

/// Body of `POST /files/{id}/approve|reject/`. Fields beyond the upload
/// report are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileReviewOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub upload_status: Option<String>,
    #[serde(default)]
    pub upload_warning: Option<String>,
    #[serde(default)]
    pub upload_errors: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Body of `/auth/login/` and `/auth/update-profile/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `/auth/me/`; `user` is null when the session has lapsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CurrentUserResponse {
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `/notifications/unread-count/`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UnreadCount {
    pub unread_count: u64,
}

/// Body of `/notifications/generate/`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedNotifications {
    #[serde(default)]
    pub notifications_created: u64,
}

/// Body of `/upload/auth/callback/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DriveCallbackResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// An authorization URL to open in a browser (Google sign-in, Drive access).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthorizationUrl {
    pub authorization_url: String,
}

/// User block inside the Google sign-in callback response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GoogleUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl GoogleUser {
    /// Split the combined `name` into a session [`User`].
    #[must_use]
    pub fn into_user(self) -> User {
        let (first, last) = self
            .name
            .trim()
            .split_once(' ')
            .map_or_else(
                || (self.name.trim().to_string(), String::new()),
                |(first, last)| (first.to_string(), last.trim().to_string()),
            );
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: first,
            last_name: last,
            google_drive_authenticated: None,
        }
    }
}

/// Body of `POST /auth/google/callback/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GoogleCallbackResponse {
    pub user: GoogleUser,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
