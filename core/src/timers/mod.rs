//! Respawn timer math
//!
//! The spawner cycles through two phases:
//! - **Respawn countdown**: counts down to the game rules' phase end time
//! - **Night**: once the countdown has elapsed, time is measured within the
//!   fixed night cycle instead
//!
//! Before the first spawn of the match the whole initial delay is the cycle.

mod model;


pub use model::TimerModel;
