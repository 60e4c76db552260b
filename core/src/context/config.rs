//! Settings persistence
//!
//! Display settings are shared types from tormentor-types; this module
//! adds loading and saving through confy.

use tormentor_types::DisplaySettings;

use super::error::ConfigError;

pub const CONFIG_APP_NAME: &str = "tormentor-esp";
pub const CONFIG_NAME: &str = "settings";

/// Extension trait for DisplaySettings persistence
pub trait SettingsExt: Sized {
    /// Load saved settings, falling back to defaults on any error
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
}

impl SettingsExt for DisplaySettings {
    fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, ConfigError> {
        let settings: DisplaySettings = confy::load(CONFIG_APP_NAME, CONFIG_NAME)?;
        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(CONFIG_APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}
