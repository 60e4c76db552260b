//! Spawn timing constants
//!
//! The host exposes the spawn and respawn durations as named server
//! constants; operators may also pin them through a TOML override.

use serde::Deserialize;

use super::error::ConfigError;
use super::game::GameContext;

pub const SPAWN_TIME_CONSTANT: &str = "dota_tormentor_spawn_time";
pub const RESPAWN_TIME_CONSTANT: &str = "dota_tormentor_respawn_time_base";

/// Length of the day/night cycle the alive phase follows (5 minutes)
pub const NIGHT_CYCLE_SECS: f32 = 5.0 * 60.0;

const DEFAULT_SPAWN_SECS: f32 = 1200.0;
const DEFAULT_RESPAWN_SECS: f32 = 600.0;

/// Durations (seconds) the timer model measures phases against.
///
/// All three are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tunables {
    /// Match time of the first spawn
    pub initial_spawn_delay: f32,
    /// Length of a respawn countdown after the spawner dies
    pub respawn_base: f32,
    /// Length of one night cycle
    pub night_cycle: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            initial_spawn_delay: DEFAULT_SPAWN_SECS,
            respawn_base: DEFAULT_RESPAWN_SECS,
            night_cycle: NIGHT_CYCLE_SECS,
        }
    }
}

impl Tunables {
    /// Read the host constants, keeping defaults for absent or non-positive values
    pub fn from_context<C: GameContext + ?Sized>(ctx: &C) -> Self {
        let defaults = Self::default();
        Self {
            initial_spawn_delay: positive_or(
                ctx.constant(SPAWN_TIME_CONSTANT),
                defaults.initial_spawn_delay,
            ),
            respawn_base: positive_or(ctx.constant(RESPAWN_TIME_CONSTANT), defaults.respawn_base),
            night_cycle: defaults.night_cycle,
        }
    }
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v > 0.0 && v.is_finite() => v,
        _ => default,
    }
}

/// Operator overrides, applied on top of whatever the host reports
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TunableOverrides {
    #[serde(default)]
    pub initial_spawn_delay: Option<f32>,
    #[serde(default)]
    pub respawn_base: Option<f32>,
    #[serde(default)]
    pub night_cycle: Option<f32>,
}

impl TunableOverrides {
    /// Parse and validate overrides from TOML
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let overrides: TunableOverrides = toml::from_str(input)?;
        overrides.validate()?;
        Ok(overrides)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("initial_spawn_delay", self.initial_spawn_delay),
            ("respawn_base", self.respawn_base),
            ("night_cycle", self.night_cycle),
        ];
        for (name, value) in fields {
            match value {
                Some(value) if !(value > 0.0 && value.is_finite()) => {
                    return Err(ConfigError::InvalidTunable { name, value });
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn apply(&self, tunables: Tunables) -> Tunables {
        Tunables {
            initial_spawn_delay: self
                .initial_spawn_delay
                .unwrap_or(tunables.initial_spawn_delay),
            respawn_base: self.respawn_base.unwrap_or(tunables.respawn_base),
            night_cycle: self.night_cycle.unwrap_or(tunables.night_cycle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;

    #[test]
    fn test_defaults_without_constants() {
        let host = FakeHost::new();
        assert_eq!(Tunables::from_context(&host), Tunables::default());
    }

    #[test]
    fn test_reads_host_constants() {
        let mut host = FakeHost::new();
        host.constants.insert(SPAWN_TIME_CONSTANT, 900.0);
        host.constants.insert(RESPAWN_TIME_CONSTANT, 480.0);

        let tunables = Tunables::from_context(&host);
        assert_eq!(tunables.initial_spawn_delay, 900.0);
        assert_eq!(tunables.respawn_base, 480.0);
        assert_eq!(tunables.night_cycle, NIGHT_CYCLE_SECS);
    }

    #[test]
    fn test_non_positive_constant_falls_back() {
        let mut host = FakeHost::new();
        host.constants.insert(RESPAWN_TIME_CONSTANT, 0.0);
        assert_eq!(Tunables::from_context(&host).respawn_base, 600.0);
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = TunableOverrides::from_toml_str("respawn_base = 420.0").unwrap();
        let tunables = overrides.apply(Tunables::default());
        assert_eq!(tunables.respawn_base, 420.0);
        assert_eq!(tunables.initial_spawn_delay, 1200.0);
    }

    #[test]
    fn test_overrides_reject_non_positive() {
        let err = TunableOverrides::from_toml_str("night_cycle = -5.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTunable {
                name: "night_cycle",
                ..
            }
        ));
    }

    #[test]
    fn test_overrides_reject_unknown_keys() {
        let err = TunableOverrides::from_toml_str("spawn = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::ParseOverrides(_)));
    }
}
