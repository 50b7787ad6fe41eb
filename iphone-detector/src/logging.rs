//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "iphone_detector=info";

/// Filter used in verbose mode when `RUST_LOG` is unset.
pub const VERBOSE_FILTER: &str = "iphone_detector=debug";

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout stays free for the rendered report. `RUST_LOG`
/// overrides the default filter. Calling this more than once is a no-op.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
