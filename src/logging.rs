//! Tracing setup
//!
//! Diagnostics go to stderr so they never interleave with command output.
//! The default level is `warn`; set `RUST_LOG=fintrack=debug` for more.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "fintrack=warn";

/// Initializes the global tracing subscriber once
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by an embedding host
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
