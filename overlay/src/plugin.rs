//! Tormentor overlay plugin
//!
//! Wires the tracker and presenter to host signals. The host creates one
//! [`InstalledOverlay`] at load time and drops it through
//! [`InstalledOverlay::uninstall`] at teardown.

use std::cell::RefCell;
use std::rc::Rc;

use tormentor_core::signal_processor::SharedHandler;
use tormentor_core::{
    AudioService, EntityTracker, GameContext, GameSignal, MinimapService, SettingsExt,
    SignalDispatcher, SignalHandler, SignalKind, SubscriptionId, TimerModel, TunableOverrides,
};
use tormentor_types::DisplaySettings;

use crate::localization::Localizer;
use crate::overlays::{DrawOutcome, OverlayPresenter, TormentorFrame};
use crate::renderer::Renderer;
use crate::viewport::Viewport;

/// Everything the overlay needs from the host engine
pub trait OverlayHost:
    GameContext + MinimapService + AudioService + Viewport + Renderer + Localizer
{
}

impl<T> OverlayHost for T where
    T: GameContext + MinimapService + AudioService + Viewport + Renderer + Localizer + ?Sized
{
}

/// Coordinator: routes signals to the tracker and draws through the presenter
#[derive(Debug, Default)]
pub struct TormentorOverlay {
    tracker: EntityTracker,
    presenter: OverlayPresenter,
    settings: DisplaySettings,
}

impl TormentorOverlay {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Create with persisted settings
    pub fn load() -> Self {
        Self::new(DisplaySettings::load())
    }

    pub fn with_presenter(mut self, presenter: OverlayPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn with_overrides(mut self, overrides: TunableOverrides) -> Self {
        self.tracker = EntityTracker::with_overrides(overrides);
        self
    }

    /// Replace settings (the host's settings surface calls this on change)
    pub fn set_settings(&mut self, settings: DisplaySettings) {
        tracing::debug!(?settings, "Overlay settings updated");
        self.settings = settings;
    }

    pub fn tracker(&self) -> &EntityTracker {
        &self.tracker
    }

    /// Draw one frame. Returns `None` when rendering is gated off or the
    /// spawner/clock cannot be resolved.
    pub fn draw<H: OverlayHost + ?Sized>(&self, host: &mut H) -> Option<DrawOutcome> {
        if !self.tracker.should_render(&self.settings, &*host) {
            return None;
        }
        let entity = self.tracker.spawner()?;
        let spawner = host.spawner(entity)?;
        let clock = host.clock()?;

        let model = TimerModel::new(clock, self.tracker.tunables(&*host));
        let frame = TormentorFrame {
            spawner,
            remaining_secs: model.remaining_time(),
            progress_ratio: model.progress_ratio(),
            visible: self.tracker.state().visible,
        };
        Some(self.presenter.draw(&frame, &self.settings, host))
    }
}

impl<H: OverlayHost + ?Sized> SignalHandler<H> for TormentorOverlay {
    fn handle_signal(&mut self, signal: &GameSignal, host: &mut H) {
        match signal {
            GameSignal::EntityCreated { entity, class } => {
                self.tracker.on_entity_created(*entity, *class);
            }
            GameSignal::EntityDestroyed { entity } => {
                if self.tracker.on_entity_destroyed(*entity) {
                    self.presenter.destroy(host);
                }
            }
            GameSignal::EntityVisibilityChanged { class, visible, .. } => {
                self.tracker.on_visibility_changed(*class, *visible);
            }
            GameSignal::PeriodicUpdate { delta } => {
                self.tracker.on_periodic_update(*delta, &self.settings, host);
            }
            GameSignal::Draw => {
                self.draw(host);
            }
        }
    }
}

/// An overlay registered with a dispatcher
pub struct InstalledOverlay {
    overlay: Rc<RefCell<TormentorOverlay>>,
    subscriptions: Vec<SubscriptionId>,
}

impl InstalledOverlay {
    /// Subscribe `overlay` to every signal kind it handles
    pub fn install<H>(overlay: TormentorOverlay, dispatcher: &mut SignalDispatcher<H>) -> Self
    where
        H: OverlayHost + ?Sized + 'static,
    {
        let overlay = Rc::new(RefCell::new(overlay));
        let handler: SharedHandler<H> = overlay.clone();
        let subscriptions = SignalKind::ALL
            .into_iter()
            .map(|kind| dispatcher.subscribe(kind, handler.clone()))
            .collect();
        tracing::info!("Tormentor overlay installed");

        Self {
            overlay,
            subscriptions,
        }
    }

    pub fn overlay(&self) -> &Rc<RefCell<TormentorOverlay>> {
        &self.overlay
    }

    /// Remove all subscriptions and hand the overlay back
    pub fn uninstall<H: ?Sized>(
        self,
        dispatcher: &mut SignalDispatcher<H>,
    ) -> Rc<RefCell<TormentorOverlay>> {
        for id in self.subscriptions {
            dispatcher.unsubscribe(id);
        }
        tracing::info!("Tormentor overlay uninstalled");
        self.overlay
    }
}
