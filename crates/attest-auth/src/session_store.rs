//! `session.json`: the signed-in user and the Google Drive flag.

use std::path::{Path, PathBuf};

use attest_core::entities::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::fs_util::{read_non_empty, remove_if_exists, write_private};

/// What is persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub user: User,
    #[serde(default)]
    pub google_drive_authenticated: bool,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    #[must_use]
    pub fn new(user: User) -> Self {
        let google_drive_authenticated = user.google_drive_authenticated.unwrap_or(false);
        Self {
            user,
            google_drive_authenticated,
            saved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored session, if any. A corrupt file is logged and treated as
    /// signed out.
    #[must_use]
    pub fn load(&self) -> Option<StoredSession> {
        let raw = read_non_empty(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "ignoring unreadable session file");
                None
            }
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.load().map(|session| session.user)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the file cannot be written.
    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::Store(e.to_string()))?;
        write_private(&self.path, &json).map_err(AuthError::Store)
    }

    /// Replace the user, keeping the Drive flag unless the new record
    /// carries one.
    ///
    /// # Errors
    ///
    /// See [`Self::save`].
    pub fn save_user(&self, user: User) -> Result<StoredSession, AuthError> {
        let previous_flag = self
            .load()
            .is_some_and(|session| session.google_drive_authenticated);
        let mut session = StoredSession::new(user);
        if session.user.google_drive_authenticated.is_none() {
            session.google_drive_authenticated = previous_flag;
        }
        self.save(&session)?;
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::NotSignedIn`] without a stored session, or
    /// [`AuthError::Store`] on write failure.
    pub fn set_drive_flag(&self, authenticated: bool) -> Result<(), AuthError> {
        let mut session = self.load().ok_or(AuthError::NotSignedIn)?;
        session.google_drive_authenticated = authenticated;
        self.save(&session)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        remove_if_exists(&self.path).map_err(AuthError::Store)
    }
}
