//! Interactive behaviour: debounce, polling, paging.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_search_debounce_ms() -> u64 {
    500
}

const fn default_notification_poll_secs() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Quiet period after the last keystroke before a search runs.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Interval between notification polls.
    #[serde(default = "default_notification_poll_secs")]
    pub notification_poll_secs: u64,

    /// Page size used when no preference has been saved.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            notification_poll_secs: default_notification_poll_secs(),
            default_page_size: default_page_size(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub const fn notification_poll_interval(&self) -> Duration {
        Duration::from_secs(self.notification_poll_secs)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an interval or the page size
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_debounce_ms == 0 {
            return Err(ConfigError::invalid("ui.search_debounce_ms", "must be > 0"));
        }
        if self.notification_poll_secs == 0 {
            return Err(ConfigError::invalid(
                "ui.notification_poll_secs",
                "must be > 0",
            ));
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::invalid("ui.default_page_size", "must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = UiConfig::default();
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.notification_poll_interval(), Duration::from_secs(30));
        assert_eq!(config.default_page_size, 20);
    }

    #[test]
    fn zero_poll_interval_is_invalid() {
        let config = UiConfig {
            notification_poll_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
