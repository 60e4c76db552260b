//! Tormentor status overlay
//!
//! Draws the spawner's minimap marker and, above the spawner in the world,
//! a status label, the icon, the countdown and a progress sweep.

use tormentor_core::{MinimapIcon, MinimapService, Rect, SpawnerSnapshot, Vec3};
use tormentor_types::{DisplaySettings, overlay_colors};

use crate::localization::Localizer;
use crate::renderer::{RadialStyle, Renderer};
use crate::utils::format_countdown;
use crate::viewport::Viewport;

/// Key of the persistent minimap icon
pub const MINIMAP_ICON_KEY: &str = "tormentor_icon";
const MINIMAP_ICON_NAME: &str = "tormentor";
const MINIMAP_ICON_SIZE: f32 = 350.0;

/// Default directory holding ability artwork
pub const DEFAULT_IMAGE_DIR: &str = "panorama/images/spellicons";
const ALIVE_TEXTURE: &str = "miniboss_alleviation_png.vtex_c";
const DEAD_TEXTURE: &str = "miniboss_unyielding_shield_png.vtex_c";

/// World units the icon floats above a living spawner
const ALIVE_HEIGHT_OFFSET: f32 = 200.0;

/// Base icon size added to the size setting (before UI scaling)
const ICON_PADDING: f32 = 44.0;
const STATUS_LABEL_GAP: f32 = 10.0;
const SWEEP_START_DEGREES: f32 = 270.0;

/// Values needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TormentorFrame {
    pub spawner: SpawnerSnapshot,
    pub remaining_secs: f32,
    /// Percentage of the current cycle left, in `[0, 100]`
    pub progress_ratio: f32,
    /// Boss form currently visible in the world
    pub visible: bool,
}

/// Which variant was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Projection undefined or covered by HUD, only the minimap marker drawn
    OffScreen,
    /// Boss visible: countdown text only
    CountdownOnly,
    Full,
}

/// Stateless presenter for the tormentor overlay
#[derive(Debug, Clone)]
pub struct OverlayPresenter {
    image_dir: String,
}

impl Default for OverlayPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR)
    }
}

impl OverlayPresenter {
    pub fn new(image_dir: impl Into<String>) -> Self {
        Self {
            image_dir: image_dir.into(),
        }
    }

    /// Screen square for the icon, `None` when this frame must be skipped
    pub fn compute_screen_rect<V: Viewport + ?Sized>(
        position: Vec3,
        is_alive: bool,
        icon_size: u8,
        viewport: &V,
    ) -> Option<Rect> {
        let anchor = if is_alive {
            position.raised(ALIVE_HEIGHT_OFFSET)
        } else {
            position
        };
        let screen = viewport.world_to_screen(anchor)?;
        if viewport.contains_hud(screen) {
            return None;
        }

        let side = f32::from(icon_size) + ICON_PADDING;
        Some(Rect::centered(screen, viewport.scale_vector(side, side)))
    }

    /// Icon artwork for the given liveness
    pub fn texture(&self, is_alive: bool) -> String {
        let file = if is_alive { ALIVE_TEXTURE } else { DEAD_TEXTURE };
        format!("{}/{}", self.image_dir, file)
    }

    pub fn draw<H>(
        &self,
        frame: &TormentorFrame,
        settings: &DisplaySettings,
        host: &mut H,
    ) -> DrawOutcome
    where
        H: Renderer + Viewport + MinimapService + Localizer + ?Sized,
    {
        let spawner = &frame.spawner;
        let is_alive = spawner.is_alive;
        Self::draw_minimap(spawner, host);

        let Some(rect) =
            Self::compute_screen_rect(spawner.position, is_alive, settings.icon_size(), host)
        else {
            return DrawOutcome::OffScreen;
        };

        if frame.visible && is_alive {
            Self::draw_timer(rect, frame.remaining_secs, host);
            return DrawOutcome::CountdownOnly;
        }

        let is_circle = settings.image_mode.is_circle();
        Self::draw_status(rect, is_alive, host);
        host.image(&self.texture(is_alive), rect, is_circle, overlay_colors::WHITE);
        Self::draw_timer(rect, frame.remaining_secs, host);

        let width = Self::stroke_width(rect, host);
        Self::draw_outline(is_circle, rect, width, host);

        // Depletes while alive, fills while dead
        let signed_ratio = if is_alive {
            -frame.progress_ratio
        } else {
            frame.progress_ratio
        };
        Self::draw_sweep(is_circle, rect, width, signed_ratio, host);

        DrawOutcome::Full
    }

    /// Remove the persistent minimap marker
    pub fn destroy<M: MinimapService + ?Sized>(&self, minimap: &mut M) {
        minimap.delete_icon(MINIMAP_ICON_KEY);
    }

    fn draw_minimap<M: MinimapService + ?Sized>(spawner: &SpawnerSnapshot, minimap: &mut M) {
        minimap.draw_icon(&MinimapIcon {
            name: MINIMAP_ICON_NAME,
            position: spawner.position,
            size: MINIMAP_ICON_SIZE,
            color: overlay_colors::for_liveness(spawner.is_alive),
            key: MINIMAP_ICON_KEY,
        });
    }

    fn draw_timer<R: Renderer + ?Sized>(rect: Rect, remaining_secs: f32, renderer: &mut R) {
        if let Some(text) = format_countdown(remaining_secs) {
            renderer.text(&text, rect, overlay_colors::WHITE);
        }
    }

    fn draw_status<H: Renderer + Localizer + ?Sized>(rect: Rect, is_alive: bool, host: &mut H) {
        let label_rect = rect.shifted_up(rect.height() / 2.0 + STATUS_LABEL_GAP);
        let text = host.localize(if is_alive { "Alive" } else { "Dead" });
        host.text(&text, label_rect, overlay_colors::WHITE);
    }

    fn stroke_width<V: Viewport + ?Sized>(rect: Rect, viewport: &V) -> f32 {
        (viewport.scale_height(2.0) + (rect.height() / 15.0).round()).round()
    }

    fn draw_outline<R: Renderer + ?Sized>(
        is_circle: bool,
        rect: Rect,
        width: f32,
        renderer: &mut R,
    ) {
        if is_circle {
            renderer.outlined_circle(rect, overlay_colors::BLACK, width);
            return;
        }
        let outline = Rect::new(rect.pos.add_scalar(-1.0), rect.size.add_scalar(2.0));
        renderer.outlined_rect(outline, overlay_colors::BLACK, width);
    }

    fn draw_sweep<R: Renderer + ?Sized>(
        is_circle: bool,
        rect: Rect,
        width: f32,
        signed_ratio: f32,
        renderer: &mut R,
    ) {
        if is_circle {
            renderer.arc(
                SWEEP_START_DEGREES,
                -signed_ratio,
                rect,
                width,
                overlay_colors::GREEN,
            );
        } else {
            renderer.radial(SWEEP_START_DEGREES, -signed_ratio, rect, &RadialStyle::progress());
        }
    }
}
