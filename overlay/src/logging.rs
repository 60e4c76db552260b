//! Logging setup for hosts that do not install their own subscriber.
//!
//! Logs go to stdout at INFO+. Set `DEBUG_LOGGING=1` to enable debug output
//! for the tormentor crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,tormentor_core=debug,tormentor_overlay=debug";

/// Install the stdout subscriber. Returns false if a global subscriber
/// was already set (the host's logging then wins).
pub fn init() -> bool {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging { DEBUG_DIRECTIVE } else { "info" };
    let filter = EnvFilter::new(filter_directive);

    let installed = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(debug_logging, "Tormentor overlay logging initialized");
    }
    installed
}
