use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The signed-in account, as returned by `/auth/login/` and `/auth/me/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Present on `/auth/me/` responses once Drive access has been granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_drive_authenticated: Option<bool>,
}

impl User {
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Compact user reference embedded in other resources (assignee, approver,
/// uploader, commenter).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRef {
    /// `None` for files whose uploader account was deleted.
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserRef {
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            &self.username,
        )
    }
}

/// Name shown for a person: "first last" when both are set, otherwise
/// whichever one is set, otherwise the username.
#[must_use]
pub fn display_name(first: &str, last: &str, username: &str) -> String {
    let first = first.trim();
    let last = last.trim();
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{first} {last}"),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (true, true) => username.to_string(),
    }
}

/// Body of `PATCH /auth/update-profile/`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(display_name("Ada", "Lovelace", "ada"), "Ada Lovelace");
        assert_eq!(display_name("Ada", "", "ada"), "Ada");
        assert_eq!(display_name("", "Lovelace", "ada"), "Lovelace");
        assert_eq!(display_name("  ", "", "ada"), "ada");
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            first_name: Some("Grace".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "first_name": "Grace" }));
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn user_tolerates_sparse_payloads() {
        let user: User = serde_json::from_str(r#"{"id": 3, "username": "sam"}"#).unwrap();
        assert_eq!(user.display_name(), "sam");
        assert!(user.google_drive_authenticated.is_none());
    }
}
