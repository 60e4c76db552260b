//! Recording host for overlay tests

use std::cell::RefCell;

use hashbrown::HashMap;
use tormentor_core::{
    AudioService, EntityHandle, GameClock, GameContext, GameUiState, MatchState, MinimapIcon,
    MinimapService, Rect, SpawnerSnapshot, TormentorLocation, Vec2, Vec3,
};
use tormentor_types::Color;

use crate::localization::Localizer;
use crate::renderer::{RadialStyle, Renderer};
use crate::viewport::Viewport;

/// A single recorded draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image {
        texture: String,
        rect: Rect,
        rounded: bool,
    },
    OutlinedCircle {
        rect: Rect,
        width: f32,
    },
    OutlinedRect {
        rect: Rect,
        width: f32,
    },
    Arc {
        start_degrees: f32,
        sweep_percent: f32,
        rect: Rect,
        width: f32,
    },
    Radial {
        start_degrees: f32,
        sweep_percent: f32,
        rect: Rect,
    },
    Text {
        text: String,
        rect: Rect,
    },
}

pub struct RecordingHost {
    // Game state
    pub clock: Option<GameClock>,
    pub ui_state: GameUiState,
    pub match_state: Option<MatchState>,
    pub spawners: HashMap<EntityHandle, SpawnerSnapshot>,
    pub boss_visible: Option<bool>,

    // Viewport
    pub projection: Option<Vec2>,
    pub hud_hit: bool,
    pub ui_scale: f32,
    /// World positions passed to the projection
    pub projected: RefCell<Vec<Vec3>>,

    // Output
    pub calls: Vec<DrawCall>,
    pub icons: Vec<MinimapIcon>,
    pub deleted_icons: Vec<String>,
    pub pings: Vec<(Vec3, f32)>,
    pub sounds: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            clock: Some(GameClock {
                game_time: 1500.0,
                raw_game_time: 1530.0,
                phase_end_time: 1200.0,
            }),
            ui_state: GameUiState::InGame,
            match_state: Some(MatchState::InProgress),
            spawners: HashMap::new(),
            boss_visible: None,
            projection: Some(Vec2::new(500.0, 300.0)),
            hud_hit: false,
            ui_scale: 1.0,
            projected: RefCell::new(Vec::new()),
            calls: Vec::new(),
            icons: Vec::new(),
            deleted_icons: Vec::new(),
            pings: Vec::new(),
            sounds: Vec::new(),
        }
    }

    pub fn put_spawner(&mut self, entity: EntityHandle, is_alive: bool) {
        self.spawners.insert(
            entity,
            SpawnerSnapshot {
                position: Vec3::new(-4100.0, 1200.0, 256.0),
                is_alive,
                location: TormentorLocation::Radiant,
            },
        );
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_output(&mut self) {
        self.calls.clear();
        self.icons.clear();
        self.projected.borrow_mut().clear();
    }
}

impl GameContext for RecordingHost {
    fn clock(&self) -> Option<GameClock> {
        self.clock
    }

    fn ui_state(&self) -> GameUiState {
        self.ui_state
    }

    fn match_state(&self) -> Option<MatchState> {
        self.match_state
    }

    fn constant(&self, _name: &str) -> Option<f32> {
        None
    }

    fn spawner(&self, entity: EntityHandle) -> Option<SpawnerSnapshot> {
        self.spawners.get(&entity).copied()
    }

    fn boss_visible(&self) -> Option<bool> {
        self.boss_visible
    }
}

impl Viewport for RecordingHost {
    fn world_to_screen(&self, position: Vec3) -> Option<Vec2> {
        self.projected.borrow_mut().push(position);
        self.projection
    }

    fn contains_shop(&self, _point: Vec2) -> bool {
        self.hud_hit
    }

    fn contains_minimap(&self, _point: Vec2) -> bool {
        false
    }

    fn contains_scoreboard(&self, _point: Vec2) -> bool {
        false
    }

    fn scale_vector(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x * self.ui_scale, y * self.ui_scale)
    }

    fn scale_height(&self, value: f32) -> f32 {
        value * self.ui_scale
    }
}

impl Renderer for RecordingHost {
    fn image(&mut self, texture: &str, rect: Rect, rounded: bool, _tint: Color) {
        self.calls.push(DrawCall::Image {
            texture: texture.to_string(),
            rect,
            rounded,
        });
    }

    fn outlined_circle(&mut self, rect: Rect, _color: Color, width: f32) {
        self.calls.push(DrawCall::OutlinedCircle { rect, width });
    }

    fn outlined_rect(&mut self, rect: Rect, _color: Color, width: f32) {
        self.calls.push(DrawCall::OutlinedRect { rect, width });
    }

    fn arc(
        &mut self,
        start_degrees: f32,
        sweep_percent: f32,
        rect: Rect,
        width: f32,
        _color: Color,
    ) {
        self.calls.push(DrawCall::Arc {
            start_degrees,
            sweep_percent,
            rect,
            width,
        });
    }

    fn radial(&mut self, start_degrees: f32, sweep_percent: f32, rect: Rect, _style: &RadialStyle) {
        self.calls.push(DrawCall::Radial {
            start_degrees,
            sweep_percent,
            rect,
        });
    }

    fn text(&mut self, text: &str, rect: Rect, _color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            rect,
        });
    }
}

impl MinimapService for RecordingHost {
    fn draw_icon(&mut self, icon: &MinimapIcon) {
        self.icons.push(icon.clone());
    }

    fn delete_icon(&mut self, key: &str) {
        self.deleted_icons.push(key.to_string());
    }

    fn draw_ping(&mut self, position: Vec3, _color: Color, expires_at: f32) {
        self.pings.push((position, expires_at));
    }
}

impl AudioService for RecordingHost {
    fn emit_sound(&mut self, cue: &str) {
        self.sounds.push(cue.to_string());
    }
}

impl Localizer for RecordingHost {}
