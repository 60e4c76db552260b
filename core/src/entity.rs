//! Entity identity and the per-tick view of the tracked spawner

use crate::geometry::Vec3;

/// Opaque host entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u32);

/// Entity classes the overlay cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    /// The periodically respawning spawner whose status is displayed
    MinibossSpawner,
    /// The visible boss form tied to the spawner
    Miniboss,
    Other,
}

/// Which side of the map the spawner currently occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TormentorLocation {
    Radiant,
    Dire,
}

/// Last observed location, `Unset` before the first observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationState {
    #[default]
    Unset,
    Known(TormentorLocation),
}

/// Current values of the tracked spawner, read from the host each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnerSnapshot {
    pub position: Vec3,
    pub is_alive: bool,
    pub location: TormentorLocation,
}
