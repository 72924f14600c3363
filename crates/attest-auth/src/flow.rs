//! Login, logout, session check, and the other account flows.

use attest_client::ApiClient;
use attest_config::StateConfig;
use attest_core::entities::{ProfileUpdate, User};

use crate::cookie_vault::{CookieVault, VaultLocation};
use crate::error::AuthError;
use crate::password::PasswordChange;
use crate::session_store::{SessionStore, StoredSession};

/// Result of [`Session::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    SignedOut,
    SignedIn {
        user: User,
        /// `false` when the backend could not be reached and the local record
        /// was trusted.
        verified: bool,
    },
}

impl SessionStatus {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn { user, .. } => Some(user),
        }
    }
}

/// Result of [`Session::logout`]. Local state is cleared either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub server_acknowledged: bool,
    pub error: Option<String>,
}

/// Durable session state: the stored user record and the cookie vault.
#[derive(Debug, Clone)]
pub struct Session {
    store: SessionStore,
    vault: CookieVault,
}

impl Session {
    #[must_use]
    pub const fn new(store: SessionStore, vault: CookieVault) -> Self {
        Self { store, vault }
    }

    /// Session files under the configured state directory.
    #[must_use]
    pub fn from_config(config: &StateConfig) -> Self {
        Self::new(
            SessionStore::new(config.session_path()),
            CookieVault::new(config.keyring_service.clone(), config.cookie_path()),
        )
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub const fn vault(&self) -> &CookieVault {
        &self.vault
    }

    /// Locally stored user, without contacting the backend.
    #[must_use]
    pub fn local_user(&self) -> Option<User> {
        self.store.user()
    }

    /// Stored user, or [`AuthError::NotSignedIn`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotSignedIn`] when nothing is stored.
    pub fn require_user(&self) -> Result<User, AuthError> {
        self.local_user().ok_or(AuthError::NotSignedIn)
    }

    /// Load saved cookies into `client`.
    pub fn restore_cookies(&self, client: &ApiClient) {
        if let Some(cookies) = self.vault.load() {
            client.restore_cookies(&cookies);
        }
    }

    /// Save the client's current cookies, if it holds any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Vault`] if the cookies cannot be written.
    pub fn persist_cookies(&self, client: &ApiClient) -> Result<Option<VaultLocation>, AuthError> {
        client
            .cookie_header()
            .map(|cookies| self.vault.store(&cookies))
            .transpose()
    }

    /// Sign in with an email address or username.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidInput`] for blank credentials, the
    /// backend's rejection as [`AuthError::Api`], or a store failure.
    pub async fn login(
        &self,
        client: &ApiClient,
        identifier: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if identifier.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput(
                "email/username and password are required".into(),
            ));
        }
        let response = client.login(identifier.trim(), password).await?;
        let session = self.store.save_user(response.user)?;
        self.persist_cookies(client)?;
        tracing::info!(user = %session.user.username, "signed in");
        Ok(session.user)
    }

    /// End the session on the backend, then clear local state regardless of
    /// the outcome.
    pub async fn logout(&self, client: &ApiClient) -> LogoutOutcome {
        let result = client.logout().await;
        self.teardown();
        match result {
            Ok(()) => LogoutOutcome {
                server_acknowledged: true,
                error: None,
            },
            Err(error) => {
                tracing::warn!(%error, "logout request failed; local session cleared anyway");
                LogoutOutcome {
                    server_acknowledged: false,
                    error: Some(error.user_message()),
                }
            }
        }
    }

    /// Clear the stored user, Drive flag, and cookies. Failures are logged.
    pub fn teardown(&self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear session file");
        }
        if let Err(error) = self.vault.clear() {
            tracing::warn!(%error, "failed to clear cookie vault");
        }
    }

    /// Decide whether the user is signed in.
    ///
    /// No local record → signed out without a request. A 401 or a `null`
    /// user clears local state. Any other failure keeps the local record as
    /// an unverified session.
    pub async fn check(&self, client: &ApiClient) -> SessionStatus {
        let Some(local) = self.store.load() else {
            return SessionStatus::SignedOut;
        };
        match client.current_user().await {
            Ok(Some(user)) => match self.store.save_user(user.clone()) {
                Ok(session) => SessionStatus::SignedIn {
                    user: session.user,
                    verified: true,
                },
                Err(error) => {
                    tracing::warn!(%error, "failed to refresh session file");
                    SessionStatus::SignedIn {
                        user,
                        verified: true,
                    }
                }
            },
            Ok(None) => {
                self.teardown();
                SessionStatus::SignedOut
            }
            Err(error) if error.is_unauthorized() => {
                self.teardown();
                SessionStatus::SignedOut
            }
            Err(error) => {
                tracing::warn!(%error, "could not verify session; trusting local record");
                SessionStatus::SignedIn {
                    user: local.user,
                    verified: false,
                }
            }
        }
    }

    /// Open the Google sign-in page in a browser and return its URL.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] if the URL cannot be fetched.
    pub async fn start_google_login(
        &self,
        client: &ApiClient,
        open_browser: bool,
    ) -> Result<String, AuthError> {
        let url = client.google_auth_url().await?.authorization_url;
        if open_browser && let Err(error) = open::that(&url) {
            tracing::warn!(%error, "failed to open browser");
        }
        Ok(url)
    }

    /// Exchange a Google authorization code and store the returned user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidInput`] for a blank code, otherwise the
    /// backend or store failure.
    pub async fn complete_google_login(
        &self,
        client: &ApiClient,
        code: &str,
    ) -> Result<User, AuthError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AuthError::InvalidInput(
                "no authorization code received".into(),
            ));
        }
        let response = client.google_callback(code).await?;
        let session = self.store.save_user(response.user.into_user())?;
        self.persist_cookies(client)?;
        Ok(session.user)
    }

    /// Re-read the Drive flag from `/auth/me/` and persist it. Any failure
    /// clears the flag.
    pub async fn refresh_drive_flag(&self, client: &ApiClient) -> bool {
        let authenticated = match client.current_user().await {
            Ok(Some(user)) => user.google_drive_authenticated.unwrap_or(false),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(%error, "could not refresh drive status");
                false
            }
        };
        if let Err(error) = self.store.set_drive_flag(authenticated) {
            tracing::debug!(%error, "drive flag not persisted");
        }
        authenticated
    }

    /// Locally stored Drive flag.
    #[must_use]
    pub fn drive_authenticated(&self) -> bool {
        self.store
            .load()
            .is_some_and(|session| session.google_drive_authenticated)
    }

    /// Send only the fields set in `update`; store the returned user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidInput`] when nothing is set, otherwise the
    /// backend or store failure.
    pub async fn update_profile(
        &self,
        client: &ApiClient,
        update: &ProfileUpdate,
    ) -> Result<User, AuthError> {
        if update.is_empty() {
            return Err(AuthError::InvalidInput("nothing to update".into()));
        }
        let user = client.update_profile(update).await?;
        Ok(self.store.save_user(user)?.user)
    }

    /// Validate locally, then ask the backend to change the password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Password`] before any request when validation
    /// fails, otherwise the backend failure.
    pub async fn change_password(
        &self,
        client: &ApiClient,
        change: &PasswordChange,
    ) -> Result<(), AuthError> {
        change.validate()?;
        client.change_password(&change.current, &change.new).await?;
        Ok(())
    }

    /// Stored session record, if any.
    #[must_use]
    pub fn stored(&self) -> Option<StoredSession> {
        self.store.load()
    }
}
