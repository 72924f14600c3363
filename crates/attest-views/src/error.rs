use attest_client::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("preferences error: {0}")]
    Preferences(String),
}
