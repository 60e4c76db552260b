use super::signal::GameSignal;

/// Trait for systems that react to game signals.
///
/// `H` is the host view handed to every handler (game state plus whatever
/// services the handler needs), so handlers never reach for global state.
pub trait SignalHandler<H: ?Sized> {
    /// Handle a single signal
    fn handle_signal(&mut self, signal: &GameSignal, host: &mut H);
}
