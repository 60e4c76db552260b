pub mod dispatcher;
pub mod handler;
pub mod signal;

pub use dispatcher::{SharedHandler, SignalDispatcher, SubscriptionId};
pub use handler::SignalHandler;
pub use signal::{GameSignal, SignalKind};
