//! Read-only view of the host's game state
//!
//! Everything the tracker needs from the running match is reached through
//! [`GameContext`], so the timer and edge-detection logic can be exercised
//! without an engine.

use crate::entity::{EntityHandle, SpawnerSnapshot};

/// UI state of the game client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUiState {
    Loading,
    Dashboard,
    InGame,
}

/// Match lifecycle state from the game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    WaitingForPlayers,
    HeroSelection,
    StrategyTime,
    PreGame,
    InProgress,
    PostGame,
}

/// Clock values from the game rules at a single instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    /// Elapsed match time in seconds
    pub game_time: f32,
    /// Engine clock used for ping lifetimes
    pub raw_game_time: f32,
    /// Absolute match time at which the current respawn countdown ends
    pub phase_end_time: f32,
}

pub trait GameContext {
    /// Current clock, `None` while no game rules exist
    fn clock(&self) -> Option<GameClock>;

    fn ui_state(&self) -> GameUiState;

    /// Match state, `None` while no game rules exist
    fn match_state(&self) -> Option<MatchState>;

    /// Named numeric server constant
    fn constant(&self, name: &str) -> Option<f32>;

    /// Current values of a spawner entity, `None` if it no longer resolves
    fn spawner(&self, entity: EntityHandle) -> Option<SpawnerSnapshot>;

    /// Visibility of the boss form, `None` if no boss entity exists
    fn boss_visible(&self) -> Option<bool>;
}
