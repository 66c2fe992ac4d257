//! Diagnostic logging setup
//!
//! Events go to stderr so stdout stays reserved for rendered output.
//! `APPCORE_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::{fmt, prelude::*};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "APPCORE_LOG";

/// Filter used when `APPCORE_LOG` is unset or invalid
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "appcore_resolve=debug,info"
    } else {
        "warn"
    }
}

/// Initialize tracing. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
