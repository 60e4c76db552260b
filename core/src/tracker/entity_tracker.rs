//! Tracked spawner reference, render gating and edge detection

use tormentor_types::{DisplaySettings, overlay_colors};

use crate::context::{GameContext, GameUiState, MatchState, TunableOverrides, Tunables};
use crate::entity::{EntityClass, EntityHandle, LocationState, SpawnerSnapshot};
use crate::host::{AudioService, MinimapService};
use crate::timers::TimerModel;

use super::state::OverlayState;

/// Seconds a notification ping stays on the minimap
pub const PING_LIFETIME_SECS: f32 = 7.0;

/// Sound cue played with a notification ping
pub const PING_SOUND: &str = "General.Ping";

/// Edges observed during one periodic update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transitions {
    pub alive_changed: bool,
    pub location_changed: bool,
    /// Pings actually emitted (gated by settings and the initial spawn phase)
    pub notifications: u8,
}

/// Owns the single tracked spawner and its overlay state.
#[derive(Debug, Default)]
pub struct EntityTracker {
    spawner: Option<EntityHandle>,
    state: OverlayState,
    overrides: TunableOverrides,
}

impl EntityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: TunableOverrides) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }

    pub fn spawner(&self) -> Option<EntityHandle> {
        self.spawner
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Host tunables with operator overrides applied
    pub fn tunables<C: GameContext + ?Sized>(&self, ctx: &C) -> Tunables {
        self.overrides.apply(Tunables::from_context(ctx))
    }

    /// Start tracking a spawner. Returns true if the entity was taken.
    pub fn on_entity_created(&mut self, entity: EntityHandle, class: EntityClass) -> bool {
        if class != EntityClass::MinibossSpawner {
            return false;
        }
        if let Some(previous) = self.spawner.replace(entity) {
            tracing::debug!(?previous, ?entity, "Replacing tracked spawner");
        } else {
            tracing::debug!(?entity, "Tracking spawner");
        }
        true
    }

    /// Stop tracking if `entity` is the tracked spawner.
    /// Returns true when tracking stopped and the state was reset.
    pub fn on_entity_destroyed(&mut self, entity: EntityHandle) -> bool {
        if self.spawner != Some(entity) {
            return false;
        }
        self.spawner = None;
        self.state.reset();
        tracing::debug!(?entity, "Spawner destroyed, tracking stopped");
        true
    }

    /// Mirror the boss form's visibility into the overlay state.
    /// A dead spawner is never marked visible.
    pub fn on_visibility_changed(&mut self, class: EntityClass, visible: bool) -> bool {
        if class != EntityClass::Miniboss {
            return false;
        }
        self.state.visible = visible && self.state.last_known_alive;
        true
    }

    /// Whether the overlay should draw this frame
    pub fn should_render<C: GameContext + ?Sized>(
        &self,
        settings: &DisplaySettings,
        ctx: &C,
    ) -> bool {
        if !settings.enabled {
            return false;
        }
        if ctx.ui_state() != GameUiState::InGame {
            return false;
        }
        match ctx.match_state() {
            None | Some(MatchState::PostGame) => return false,
            Some(_) => {}
        }
        self.spawner.is_some()
    }

    /// Re-check liveness and location against the last observation.
    ///
    /// Each changed field fires one notification; unchanged fields fire
    /// nothing no matter how often this runs.
    pub fn on_periodic_update<H>(
        &mut self,
        delta: f32,
        settings: &DisplaySettings,
        host: &mut H,
    ) -> Transitions
    where
        H: GameContext + MinimapService + AudioService + ?Sized,
    {
        if delta <= 0.0 {
            return Transitions::default();
        }
        let Some(entity) = self.spawner else {
            return Transitions::default();
        };
        let Some(snapshot) = host.spawner(entity) else {
            return Transitions::default();
        };

        let mut transitions = self.observe(&snapshot, host.boss_visible());
        if transitions.alive_changed {
            tracing::debug!(?entity, is_alive = snapshot.is_alive, "Spawner liveness changed");
            transitions.notifications += u8::from(self.ping_minimap(&snapshot, settings, host));
        }
        if transitions.location_changed {
            tracing::debug!(?entity, location = ?snapshot.location, "Spawner location changed");
            transitions.notifications += u8::from(self.ping_minimap(&snapshot, settings, host));
        }
        transitions
    }

    /// Update the stored observation and report which fields changed
    fn observe(&mut self, snapshot: &SpawnerSnapshot, boss_visible: Option<bool>) -> Transitions {
        let mut transitions = Transitions::default();

        if self.state.last_known_alive != snapshot.is_alive {
            self.state.last_known_alive = snapshot.is_alive;
            // Visibility may have changed while nothing was listening
            self.state.visible = snapshot.is_alive && boss_visible.unwrap_or(false);
            transitions.alive_changed = true;
        }

        let location = LocationState::Known(snapshot.location);
        if self.state.last_known_location != location {
            self.state.last_known_location = location;
            transitions.location_changed = true;
        }

        transitions
    }

    /// Ping the spawner's position and play the cue. Returns true if emitted.
    fn ping_minimap<H>(
        &self,
        snapshot: &SpawnerSnapshot,
        settings: &DisplaySettings,
        host: &mut H,
    ) -> bool
    where
        H: GameContext + MinimapService + AudioService + ?Sized,
    {
        if !settings.enabled {
            return false;
        }
        let Some(clock) = host.clock() else {
            return false;
        };
        if TimerModel::new(clock, self.tunables(host)).is_initial_spawn_phase() {
            return false;
        }
        if !settings.notify_minimap {
            return false;
        }

        host.draw_ping(
            snapshot.position,
            overlay_colors::WHITE,
            clock.raw_game_time + PING_LIFETIME_SECS,
        );
        host.emit_sound(PING_SOUND);
        tracing::info!(position = ?snapshot.position, "Spawner state change pinged");
        true
    }
}
