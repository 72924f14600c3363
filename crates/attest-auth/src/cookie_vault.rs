//! Durable storage for the backend's session cookies.
//!
//! Priority: OS keyring → file (`<state dir>/cookies`, mode 0600). A keyring
//! write is read back through a fresh entry before it is trusted; platforms
//! whose keyring does not persist fall back to the file.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::fs_util::{read_non_empty, remove_if_exists, write_private};

const KEYRING_USER: &str = "session-cookies";

/// Where the cookies currently live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultLocation {
    Keyring,
    File,
}

impl fmt::Display for VaultLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::File => "file",
        })
    }
}

#[derive(Debug, Clone)]
pub struct CookieVault {
    keyring_service: Option<String>,
    file: PathBuf,
}

impl CookieVault {
    #[must_use]
    pub fn new(keyring_service: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: Some(keyring_service.into()),
            file: file.into(),
        }
    }

    /// Vault that never touches the OS keyring.
    #[must_use]
    pub fn file_only(file: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            file: file.into(),
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    fn entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    /// Persist a `Cookie` header value.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Vault`] if both the keyring and the file fail.
    pub fn store(&self, cookies: &str) -> Result<VaultLocation, AuthError> {
        if let Some(entry) = self.entry() {
            match entry.set_password(cookies) {
                Ok(()) if self.keyring_value().as_deref() == Some(cookies) => {
                    remove_if_exists(&self.file).map_err(AuthError::Vault)?;
                    return Ok(VaultLocation::Keyring);
                }
                Ok(()) => tracing::warn!("keyring did not persist cookies; falling back to file"),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        write_private(&self.file, cookies).map_err(AuthError::Vault)?;
        Ok(VaultLocation::File)
    }

    /// Stored cookies, keyring first.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.keyring_value().or_else(|| read_non_empty(&self.file))
    }

    #[must_use]
    pub fn location(&self) -> Option<VaultLocation> {
        if self.keyring_value().is_some() {
            return Some(VaultLocation::Keyring);
        }
        read_non_empty(&self.file).map(|_| VaultLocation::File)
    }

    /// Delete cookies from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Vault`] if the file cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.entry() {
            let _ = entry.delete_credential();
        }
        remove_if_exists(&self.file).map_err(AuthError::Vault)
    }

    fn keyring_value(&self) -> Option<String> {
        let service = self.keyring_service.as_deref()?;
        keyring::Entry::new(service, KEYRING_USER)
            .ok()?
            .get_password()
            .ok()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_vault_store_load_clear() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let vault = CookieVault::file_only(tmp.path().join("cookies"));
        assert_eq!(vault.load(), None);
        assert_eq!(vault.location(), None);

        let location = vault.store("sessionid=s1; csrftoken=t1").unwrap();
        assert_eq!(location, VaultLocation::File);
        assert_eq!(vault.load().as_deref(), Some("sessionid=s1; csrftoken=t1"));
        assert_eq!(vault.location(), Some(VaultLocation::File));

        vault.clear().unwrap();
        assert_eq!(vault.load(), None);
    }

    #[cfg(unix)]
    #[test]
    fn cookie_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let vault = CookieVault::file_only(tmp.path().join("nested/cookies"));
        vault.store("sessionid=s1").unwrap();
        let mode = std::fs::metadata(vault.file_path())
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "cookie file should be 0600");
    }

    #[test]
    fn whitespace_file_is_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("cookies");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(CookieVault::file_only(path).load(), None);
    }
}
