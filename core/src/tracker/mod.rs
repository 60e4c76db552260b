//! Spawner tracking
//!
//! - **State**: last observed liveness/location and the reduced-display flag
//! - **Tracker**: owns the tracked entity reference, render gating, and
//!   edge-triggered minimap notifications

mod entity_tracker;
mod state;


pub use entity_tracker::{EntityTracker, Transitions, PING_LIFETIME_SECS, PING_SOUND};
pub use state::OverlayState;
