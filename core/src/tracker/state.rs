use crate::entity::LocationState;

/// Transient per-entity overlay state.
///
/// `last_known_alive` starts out `true` so a spawner that is already alive
/// when tracking begins does not register as a dead→alive transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    /// Boss form is visible in the world: only the countdown is drawn
    pub visible: bool,
    pub last_known_alive: bool,
    pub last_known_location: LocationState,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            visible: false,
            last_known_alive: true,
            last_known_location: LocationState::Unset,
        }
    }
}

impl OverlayState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
