//! Tracing subscriber setup
//!
//! Logs always go to stderr so stdout only carries resolved values.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,lytc=warn,lytc_config=warn";
const DEBUG_FILTER: &str = "info,lytc=debug,lytc_config=debug";

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over `--debug`. JSON mode switches to JSON log lines.
pub fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug_enabled {
            DEBUG_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(debug_enabled)
            .with_env_filter(filter)
            .init();
    }
}
