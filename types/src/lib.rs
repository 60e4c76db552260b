//! Shared settings types for the tormentor overlay
//!
//! This crate contains serializable configuration types that are shared between
//! the tracking core (tormentor-core) and the presentation layer (tormentor-overlay).

use serde::{Deserialize, Serialize};

/// RGBA color
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Default Color Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Colors used by the tormentor overlay
pub mod overlay_colors {
    use super::Color;

    pub const WHITE: Color = [255, 255, 255, 255];
    pub const BLACK: Color = [0, 0, 0, 255];
    pub const GREEN: Color = [0, 255, 0, 255];
    pub const AQUA: Color = [0, 255, 255, 255]; // Spawner alive
    pub const RED: Color = [255, 0, 0, 255]; // Spawner dead

    /// Minimap marker color keyed on liveness
    pub fn for_liveness(is_alive: bool) -> Color {
        if is_alive { AQUA } else { RED }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_icon_size() -> u8 {
    DisplaySettings::ICON_SIZE_DEFAULT
}

// ─────────────────────────────────────────────────────────────────────────────
// Display Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Shape used for the icon, its outline and the progress sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
    #[default]
    Circle,
    Square,
}

impl ImageMode {
    pub fn is_circle(self) -> bool {
        matches!(self, ImageMode::Circle)
    }
}

/// User-facing overlay settings.
///
/// Read-only as far as the tracker and presenter are concerned; the host's
/// settings surface owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Master toggle
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ping the minimap and play a sound when the spawner changes state
    #[serde(default = "default_true")]
    pub notify_minimap: bool,
    /// Extra icon size on top of the base padding (slider value)
    #[serde(default = "default_icon_size")]
    pub icon_size: u8,
    #[serde(default)]
    pub image_mode: ImageMode,
}

impl DisplaySettings {
    pub const ICON_SIZE_MIN: u8 = 0;
    pub const ICON_SIZE_MAX: u8 = 50;
    pub const ICON_SIZE_DEFAULT: u8 = 25;

    /// Icon size clamped to the slider range
    pub fn icon_size(&self) -> u8 {
        self.icon_size.clamp(Self::ICON_SIZE_MIN, Self::ICON_SIZE_MAX)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            notify_minimap: true,
            icon_size: Self::ICON_SIZE_DEFAULT,
            image_mode: ImageMode::Circle,
        }
    }
}
