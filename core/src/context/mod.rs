mod config;
mod error;
mod game;
mod tunables;

pub use config::{CONFIG_APP_NAME, CONFIG_NAME, SettingsExt};
pub use error::ConfigError;
pub use game::{GameClock, GameContext, GameUiState, MatchState};
pub use tunables::{
    NIGHT_CYCLE_SECS, RESPAWN_TIME_CONSTANT, SPAWN_TIME_CONSTANT, TunableOverrides, Tunables,
};
