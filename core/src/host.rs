//! Write-only host services used for notifications
//!
//! The host engine implements these; calls are fire-and-forget.

use tormentor_types::Color;

use crate::geometry::Vec3;

/// A persistent minimap icon, redrawn every frame under a fixed key
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapIcon {
    /// Icon artwork name
    pub name: &'static str,
    pub position: Vec3,
    pub size: f32,
    pub color: Color,
    /// Identifier used to update/remove the icon
    pub key: &'static str,
}

pub trait MinimapService {
    /// Draw or update a persistent icon
    fn draw_icon(&mut self, icon: &MinimapIcon);

    /// Remove a persistent icon by key (no-op if absent)
    fn delete_icon(&mut self, key: &str);

    /// Place a timed ping; `expires_at` is in raw game time
    fn draw_ping(&mut self, position: Vec3, color: Color, expires_at: f32);
}

pub trait AudioService {
    /// Play a named one-shot sound cue
    fn emit_sound(&mut self, cue: &str);
}
