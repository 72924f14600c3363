//! # attest-auth
//!
//! Session lifecycle for attest: the persisted user record
//! (`session.json`), the cookie vault (OS keyring with a 0600 file
//! fallback), and the login/logout/session-check, Google sign-in, profile,
//! and password flows built on `attest-client`.

pub mod cookie_vault;
pub mod error;
pub mod flow;
pub mod password;
pub mod session_store;

mod fs_util;

pub use cookie_vault::{CookieVault, VaultLocation};
pub use error::AuthError;
pub use flow::{LogoutOutcome, Session, SessionStatus};
pub use password::{PasswordChange, PasswordError};
pub use session_store::{SessionStore, StoredSession};
