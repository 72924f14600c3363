use std::sync::Arc;

use anyhow::Context;
use attest_auth::Session;
use attest_client::ApiClient;
use attest_config::AttestConfig;
use attest_core::entities::User;
use attest_views::{PreferenceStore, Preferences};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AttestConfig,
    pub client: Arc<ApiClient>,
    pub session: Session,
    pub preferences: PreferenceStore,
}

impl AppContext {
    /// Build the API client and restore the saved session cookies into it.
    pub fn init(config: AttestConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api)
            .with_context(|| format!("failed to create API client for {}", config.api.base_url))?;
        let session = Session::from_config(&config.state);
        session.restore_cookies(&client);
        let preferences = PreferenceStore::new(config.state.preferences_path());
        Ok(Self {
            config,
            client: Arc::new(client),
            session,
            preferences,
        })
    }

    /// The stored user, or an error telling the caller to sign in.
    pub fn require_user(&self) -> anyhow::Result<User> {
        Ok(self.session.require_user()?)
    }

    /// Saved listing preferences, falling back to the configured page size.
    pub fn listing_preferences(&self) -> Preferences {
        self.preferences.load_or(Preferences::new(
            attest_core::enums::ViewMode::default(),
            self.config.ui.default_page_size.into(),
        ))
    }

    /// Write the cookie jar back to the vault after a state-changing call.
    pub fn persist_cookies(&self) {
        if let Err(error) = self.session.persist_cookies(&self.client) {
            tracing::warn!(%error, "failed to persist session cookies");
        }
    }
}
