//! Explicit signal subscriptions
//!
//! Handlers register per [`SignalKind`] and receive signals in
//! subscription order. Subscriptions are scoped: whoever subscribes keeps
//! the returned ids and unsubscribes them at teardown.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;

use super::handler::SignalHandler;
use super::signal::{GameSignal, SignalKind};

/// Handler shared between the dispatcher and its owner
pub type SharedHandler<H> = Rc<RefCell<dyn SignalHandler<H>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-threaded signal dispatcher
pub struct SignalDispatcher<H: ?Sized> {
    next_id: u64,
    subscriptions: HashMap<SignalKind, Vec<(SubscriptionId, SharedHandler<H>)>>,
}

impl<H: ?Sized> Default for SignalDispatcher<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscriptions: HashMap::new(),
        }
    }
}

impl<H: ?Sized> SignalDispatcher<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: SignalKind, handler: SharedHandler<H>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions
            .entry(kind)
            .or_default()
            .push((id, handler));
        tracing::debug!(?kind, ?id, "Signal subscription added");
        id
    }

    /// Remove a subscription. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for handlers in self.subscriptions.values_mut() {
            if let Some(index) = handlers.iter().position(|(sub, _)| *sub == id) {
                handlers.remove(index);
                tracing::debug!(?id, "Signal subscription removed");
                return true;
            }
        }
        false
    }

    /// Deliver a signal to every subscriber of its kind.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, signal: &GameSignal, host: &mut H) -> usize {
        let Some(handlers) = self.subscriptions.get(&signal.kind()) else {
            return 0;
        };

        let mut delivered = 0;
        for (id, handler) in handlers {
            // A handler re-entering dispatch while already running is skipped
            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    handler.handle_signal(signal, host);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::warn!(?id, kind = ?signal.kind(), "Handler busy, signal dropped");
                }
            }
        }
        delivered
    }
}
