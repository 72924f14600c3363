//! Where durable client state lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "attest-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateConfig {
    /// State directory. Empty means `~/.attest`.
    #[serde(default)]
    pub dir: String,

    /// Service name used for the OS keyring entry holding session cookies.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl StateConfig {
    /// Resolved state directory. A leading `~/` expands to the home directory.
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        let dir = self.dir.trim();
        if dir.is_empty() {
            return dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".attest");
        }
        if let Some(rest) = dir.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(rest);
        }
        PathBuf::from(dir)
    }

    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.state_dir().join("session.json")
    }

    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.state_dir().join("preferences.json")
    }

    #[must_use]
    pub fn cookie_path(&self) -> PathBuf {
        self.state_dir().join("cookies")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_dir_is_used_verbatim() {
        let config = StateConfig {
            dir: "/tmp/attest-state".into(),
            ..Default::default()
        };
        assert_eq!(
            config.session_path(),
            PathBuf::from("/tmp/attest-state/session.json")
        );
        assert_eq!(config.cookie_path(), PathBuf::from("/tmp/attest-state/cookies"));
    }

    #[test]
    fn empty_dir_defaults_under_home() {
        let config = StateConfig::default();
        assert!(config.state_dir().ends_with(".attest"));
        assert_eq!(config.keyring_service, "attest-cli");
    }
}
