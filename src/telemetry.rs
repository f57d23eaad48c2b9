//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the subscriber filter from an already-resolved directive.
///
/// `Config::from_env` owns the `RUST_LOG` lookup; the environment is not
/// consulted again here.
pub fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::new(directive)
}

/// Install the global tracing subscriber
pub fn init_tracing(directive: &str) {
    // Ignore the error when a subscriber is already installed (tests)
    let _ = tracing_subscriber::registry()
        .with(log_filter(directive))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
