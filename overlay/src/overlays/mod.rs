//! Overlay implementations
//!
//! Each overlay turns tracker state and timer values into host draw calls.

mod tormentor;


pub use tormentor::{
    DEFAULT_IMAGE_DIR, DrawOutcome, MINIMAP_ICON_KEY, OverlayPresenter, TormentorFrame,
};
