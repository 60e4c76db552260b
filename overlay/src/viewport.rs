//! Camera projection and HUD layout queries

use tormentor_core::{Vec2, Vec3};

pub trait Viewport {
    /// Project a world position, `None` when off-screen or behind the camera
    fn world_to_screen(&self, position: Vec3) -> Option<Vec2>;

    fn contains_shop(&self, point: Vec2) -> bool;
    fn contains_minimap(&self, point: Vec2) -> bool;
    fn contains_scoreboard(&self, point: Vec2) -> bool;

    /// Scale a base-resolution size by the UI scale factor
    fn scale_vector(&self, x: f32, y: f32) -> Vec2;

    /// Scale a base-resolution height by the UI scale factor
    fn scale_height(&self, value: f32) -> f32;

    /// Whether `point` falls on a HUD panel the overlay must not cover
    fn contains_hud(&self, point: Vec2) -> bool {
        self.contains_shop(point) || self.contains_minimap(point) || self.contains_scoreboard(point)
    }
}
