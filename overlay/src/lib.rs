//! Tormentor Overlay Library
//!
//! Presentation layer for the tormentor tracker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     plugin                          │
//! │      TormentorOverlay, InstalledOverlay             │
//! │   (signal routing, render gating, lifecycle)        │
//! ├─────────────────────────────────────────────────────┤
//! │                    overlays/                        │
//! │                 OverlayPresenter                    │
//! │       (screen geometry, variant selection)          │
//! ├─────────────────────────────────────────────────────┤
//! │          renderer / viewport / localization         │
//! │      (host drawing primitives and projection)       │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod localization;
pub mod logging;
pub mod overlays;
pub mod plugin;
pub mod renderer;
pub mod utils;
pub mod viewport;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use localization::Localizer;
pub use overlays::{DrawOutcome, OverlayPresenter, TormentorFrame};
pub use plugin::{InstalledOverlay, OverlayHost, TormentorOverlay};
pub use renderer::{RadialStyle, Renderer};
pub use viewport::Viewport;
