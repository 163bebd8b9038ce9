//! Theme preference use case.

use std::sync::Arc;

use zonedex_domain::{Theme, THEME_STORAGE_KEY};

use crate::infrastructure::ports::{StorageError, StoragePort};

/// Read and persist the display theme.
pub struct ThemePreference {
    storage: Arc<dyn StoragePort>,
}

impl ThemePreference {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Stored theme, or the default when absent or invalid.
    pub fn current(&self) -> Theme {
        let stored = self.storage.load(THEME_STORAGE_KEY);
        if let Some(raw) = stored.as_deref() {
            if raw.parse::<Theme>().is_err() {
                tracing::warn!(value = %raw, "Ignoring invalid stored theme");
            }
        }
        Theme::from_stored(stored.as_deref())
    }

    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.save(THEME_STORAGE_KEY, theme.as_str())?;
        tracing::info!(theme = %theme, "Theme saved");
        Ok(())
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let next = match self.current() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next)?;
        Ok(next)
    }
}
