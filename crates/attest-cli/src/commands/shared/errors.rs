use attest_auth::AuthError;
use attest_client::ApiError;

/// Whether any error in the chain is the backend rejecting the session.
pub fn is_unauthorized(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<ApiError>()
            .is_some_and(ApiError::is_unauthorized)
            || cause
                .downcast_ref::<AuthError>()
                .is_some_and(|auth| matches!(auth, AuthError::Api(api) if api.is_unauthorized()))
    })
}
