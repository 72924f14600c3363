//! Cross-cutting error types for attest.
//!
//! Transport errors live in `attest-client` (`ApiError`) and session errors in
//! `attest-auth` (`AuthError`); the CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any attest crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A textual value did not name any known variant.
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("invalid state transition for submission {id}: {from} -> {to}")]
    InvalidTransition { id: u64, from: String, to: String },

    /// Input failed a client-side check before reaching the server.
    #[error("validation error: {0}")]
    Validation(String),
}
