//! Drawing primitives provided by the host engine
//!
//! Every call is fire-and-forget; the host owns textures, fonts and the
//! frame lifecycle.

use tormentor_core::Rect;
use tormentor_types::{Color, overlay_colors};

/// Fill/outline style for a square radial sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStyle {
    pub background: Color,
    pub fill: Color,
    pub outline_width: f32,
    pub outlined: bool,
}

impl RadialStyle {
    /// Green sweep over a black background
    pub fn progress() -> Self {
        Self {
            background: overlay_colors::BLACK,
            fill: overlay_colors::GREEN,
            outline_width: 3.0,
            outlined: true,
        }
    }
}

pub trait Renderer {
    /// Draw a texture stretched over `rect`; `rounded` clips it to a circle
    fn image(&mut self, texture: &str, rect: Rect, rounded: bool, tint: Color);

    fn outlined_circle(&mut self, rect: Rect, color: Color, width: f32);

    fn outlined_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Stroke an arc inscribed in `rect`.
    ///
    /// `sweep_percent` is a percentage of a full turn starting at
    /// `start_degrees`; its sign selects the direction.
    fn arc(
        &mut self,
        start_degrees: f32,
        sweep_percent: f32,
        rect: Rect,
        width: f32,
        color: Color,
    );

    /// Fill a radial (clock-wipe) sweep over `rect`, same angle convention as [`Renderer::arc`]
    fn radial(&mut self, start_degrees: f32, sweep_percent: f32, rect: Rect, style: &RadialStyle);

    /// Draw text centered in `rect`
    fn text(&mut self, text: &str, rect: Rect, color: Color);
}
