//! Error types for context operations

use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save settings")]
    Save(#[source] confy::ConfyError),

    #[error("failed to parse tunable overrides")]
    ParseOverrides(#[from] toml::de::Error),

    #[error("tunable '{name}' must be positive, got {value}")]
    InvalidTunable { name: &'static str, value: f32 },
}
