//! Logging setup.
//!
//! The library only emits `tracing` events; embedding applications call
//! [`init`] once to print them. `RUST_LOG` overrides the default level.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber at `info` level
pub fn init() {
    init_with("info");
}

/// Install a formatting subscriber with a default directive such as
/// `"sheetboard=debug"`. Does nothing if a subscriber is already set.
pub fn init_with(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
