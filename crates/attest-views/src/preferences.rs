//! `preferences.json`: listing layout and page size, kept across runs.
//! Filter values are deliberately not part of it.

use std::path::{Path, PathBuf};

use attest_core::enums::ViewMode;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::pagination::PageSize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "categoriesViewMode", default)]
    pub view_mode: ViewMode,
    #[serde(rename = "categoriesPageSize", default)]
    pub page_size: PageSize,
}

impl Preferences {
    /// Keys accepted by [`Self::set`].
    pub const KEYS: [&'static str; 2] = ["view-mode", "page-size"];

    #[must_use]
    pub const fn new(view_mode: ViewMode, page_size: PageSize) -> Self {
        Self {
            view_mode,
            page_size,
        }
    }

    /// Set one preference from user input.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidInput`] for an unknown key or value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ViewError> {
        match key {
            "view-mode" | "categoriesViewMode" => {
                self.view_mode = value
                    .parse::<ViewMode>()
                    .map_err(|e| ViewError::InvalidInput(e.to_string()))?;
            }
            "page-size" | "categoriesPageSize" => {
                self.page_size = value.parse()?;
            }
            other => {
                return Err(ViewError::InvalidInput(format!(
                    "unknown preference '{other}' (expected one of: {})",
                    Self::KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved preferences. `None` when nothing was saved yet or the file is
    /// unreadable.
    #[must_use]
    pub fn load(&self) -> Option<Preferences> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(preferences) => Some(preferences),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "ignoring unreadable preferences");
                None
            }
        }
    }

    /// Saved preferences, or `fallback`.
    #[must_use]
    pub fn load_or(&self, fallback: Preferences) -> Preferences {
        self.load().unwrap_or(fallback)
    }

    /// # Errors
    ///
    /// Returns [`ViewError::Preferences`] if the file cannot be written.
    pub fn save(&self, preferences: &Preferences) -> Result<(), ViewError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ViewError::Preferences(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(preferences)
            .map_err(|e| ViewError::Preferences(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| ViewError::Preferences(format!("{}: {e}", self.path.display())))
    }
}
