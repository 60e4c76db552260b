pub mod context;
pub mod entity;
pub mod geometry;
pub mod host;
pub mod signal_processor;
pub mod timers;
pub mod tracker;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use context::{
    ConfigError, GameClock, GameContext, GameUiState, MatchState, SettingsExt, TunableOverrides,
    Tunables,
};
pub use entity::{EntityClass, EntityHandle, LocationState, SpawnerSnapshot, TormentorLocation};
pub use geometry::{Rect, Vec2, Vec3};
pub use host::{AudioService, MinimapIcon, MinimapService};
pub use signal_processor::{GameSignal, SignalDispatcher, SignalHandler, SignalKind, SubscriptionId};
pub use timers::TimerModel;
pub use tracker::{EntityTracker, OverlayState, Transitions};
pub use tormentor_types::{DisplaySettings, ImageMode};
