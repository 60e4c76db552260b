//! Fake host for unit tests

use hashbrown::HashMap;
use tormentor_types::Color;

use crate::context::{GameClock, GameContext, GameUiState, MatchState};
use crate::entity::{EntityHandle, SpawnerSnapshot, TormentorLocation};
use crate::geometry::Vec3;
use crate::host::{AudioService, MinimapIcon, MinimapService};

/// In-game host with a settable clock and recorded notifications
pub struct FakeHost {
    pub clock: Option<GameClock>,
    pub ui_state: GameUiState,
    pub match_state: Option<MatchState>,
    pub constants: HashMap<&'static str, f32>,
    pub spawners: HashMap<EntityHandle, SpawnerSnapshot>,
    pub boss_visible: Option<bool>,
    pub pings: Vec<(Vec3, Color, f32)>,
    pub sounds: Vec<String>,
    pub icons: Vec<MinimapIcon>,
    pub deleted_icons: Vec<String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            clock: Some(GameClock {
                game_time: 0.0,
                raw_game_time: 0.0,
                phase_end_time: 1200.0,
            }),
            ui_state: GameUiState::InGame,
            match_state: Some(MatchState::InProgress),
            constants: HashMap::new(),
            spawners: HashMap::new(),
            boss_visible: None,
            pings: Vec::new(),
            sounds: Vec::new(),
            icons: Vec::new(),
            deleted_icons: Vec::new(),
        }
    }

    pub fn set_time(&mut self, game_time: f32, phase_end_time: f32) {
        self.clock = Some(GameClock {
            game_time,
            raw_game_time: game_time + 60.0,
            phase_end_time,
        });
    }

    pub fn put_spawner(
        &mut self,
        entity: EntityHandle,
        is_alive: bool,
        location: TormentorLocation,
    ) {
        self.spawners.insert(
            entity,
            SpawnerSnapshot {
                position: Vec3::new(-4100.0, 1200.0, 256.0),
                is_alive,
                location,
            },
        );
    }
}

impl GameContext for FakeHost {
    fn clock(&self) -> Option<GameClock> {
        self.clock
    }

    fn ui_state(&self) -> GameUiState {
        self.ui_state
    }

    fn match_state(&self) -> Option<MatchState> {
        self.match_state
    }

    fn constant(&self, name: &str) -> Option<f32> {
        self.constants.get(name).copied()
    }

    fn spawner(&self, entity: EntityHandle) -> Option<SpawnerSnapshot> {
        self.spawners.get(&entity).copied()
    }

    fn boss_visible(&self) -> Option<bool> {
        self.boss_visible
    }
}

impl MinimapService for FakeHost {
    fn draw_icon(&mut self, icon: &MinimapIcon) {
        self.icons.push(icon.clone());
    }

    fn delete_icon(&mut self, key: &str) {
        self.deleted_icons.push(key.to_string());
    }

    fn draw_ping(&mut self, position: Vec3, color: Color, expires_at: f32) {
        self.pings.push((position, color, expires_at));
    }
}

impl AudioService for FakeHost {
    fn emit_sound(&mut self, cue: &str) {
        self.sounds.push(cue.to_string());
    }
}
