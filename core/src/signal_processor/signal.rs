use crate::entity::{EntityClass, EntityHandle};

/// Lifecycle signals delivered by the host engine.
/// All signals arrive on the host's main thread, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum GameSignal {
    // Entity lifecycle
    EntityCreated {
        entity: EntityHandle,
        class: EntityClass,
    },
    EntityDestroyed {
        entity: EntityHandle,
    },
    EntityVisibilityChanged {
        entity: EntityHandle,
        class: EntityClass,
        visible: bool,
    },

    /// Authoritative simulation tick
    PeriodicUpdate {
        /// Seconds since the previous tick
        delta: f32,
    },

    /// Render tick
    Draw,
}

/// Discriminant used for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    EntityCreated,
    EntityDestroyed,
    EntityVisibilityChanged,
    PeriodicUpdate,
    Draw,
}

impl SignalKind {
    pub const ALL: [SignalKind; 5] = [
        SignalKind::EntityCreated,
        SignalKind::EntityDestroyed,
        SignalKind::EntityVisibilityChanged,
        SignalKind::PeriodicUpdate,
        SignalKind::Draw,
    ];
}

impl GameSignal {
    pub fn kind(&self) -> SignalKind {
        match self {
            GameSignal::EntityCreated { .. } => SignalKind::EntityCreated,
            GameSignal::EntityDestroyed { .. } => SignalKind::EntityDestroyed,
            GameSignal::EntityVisibilityChanged { .. } => SignalKind::EntityVisibilityChanged,
            GameSignal::PeriodicUpdate { .. } => SignalKind::PeriodicUpdate,
            GameSignal::Draw => SignalKind::Draw,
        }
    }
}
