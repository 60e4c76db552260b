//! Pure timer computations over a clock snapshot

use crate::context::{GameClock, Tunables};

/// Timer values for one clock snapshot.
///
/// Every method recomputes from the snapshot; the phase that produced the
/// remaining time is never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerModel {
    clock: GameClock,
    tunables: Tunables,
}

impl TimerModel {
    pub fn new(clock: GameClock, tunables: Tunables) -> Self {
        Self { clock, tunables }
    }

    /// True until the first spawn of the match
    pub fn is_initial_spawn_phase(&self) -> bool {
        self.clock.game_time < self.tunables.initial_spawn_delay
    }

    /// Seconds left in the respawn countdown (0 once it has elapsed)
    fn countdown_remaining(&self) -> f32 {
        (self.clock.phase_end_time - self.clock.game_time).max(0.0)
    }

    /// Seconds until the next phase change
    pub fn remaining_time(&self) -> f32 {
        let countdown = self.countdown_remaining();
        if countdown == 0.0 {
            let night = self.tunables.night_cycle;
            night - self.clock.game_time.rem_euclid(night)
        } else {
            countdown
        }
    }

    /// Length of the phase the remaining time is measured against
    pub fn full_cycle_duration(&self) -> f32 {
        if self.is_initial_spawn_phase() {
            self.tunables.initial_spawn_delay
        } else if self.countdown_remaining() > 0.0 {
            self.tunables.respawn_base
        } else {
            self.tunables.night_cycle
        }
    }

    /// Remaining time as a percentage of the full cycle, in `[0, 100]`
    pub fn progress_ratio(&self) -> f32 {
        (100.0 * (self.remaining_time() / self.full_cycle_duration())).clamp(0.0, 100.0)
    }
}
