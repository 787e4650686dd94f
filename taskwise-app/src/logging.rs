/// Tracing subscriber setup
///
/// Embedding applications and tests call [`init`] once at startup. The
/// filter honors `RUST_LOG` and falls back to debug-level output for the
/// Taskwise crates.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "taskwise_app=debug,taskwise_core=debug,taskwise_assist=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
