//! Log output for the `bayer_dng_rs` binary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Encoder progress at info; dependencies only when they warn.
pub const DEFAULT_DIRECTIVES: &str = "warn,bayer_dng_rs=info";

/// `RUST_LOG` when set and valid, [`DEFAULT_DIRECTIVES`] otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Close events carry the timings of the encode phases (`validate_raster`,
/// `write_tags`, `write_scanlines`, `write_directory`); only emit them when
/// running verbose.
fn span_events(directives: &str) -> FmtSpan {
    if directives.contains("debug") || directives.contains("trace") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init() -> Result<(), TryInitError> {
    let env_filter = env_filter();
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&env_filter.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}
