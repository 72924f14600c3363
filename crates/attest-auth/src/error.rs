use attest_client::ApiError;
use thiserror::Error;

use crate::password::PasswordError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `attest auth login`")]
    NotSignedIn,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("session store error: {0}")]
    Store(String),

    #[error("cookie vault error: {0}")]
    Vault(String),
}

impl AuthError {
    /// Whether the backend rejected the session itself.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotSignedIn) || matches!(self, Self::Api(e) if e.is_unauthorized())
    }
}
