// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup with tracing.
//!
//! Filtering follows `BROCHURE_LENS_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "BROCHURE_LENS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from [`ENV_LOG_FILTER`], falling back to `info` when it
/// is unset or invalid.
#[must_use]
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(ENV_LOG_FILTER).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// A second call leaves the first subscriber in place.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(false))
        .try_init();

    match result {
        Ok(()) => tracing::debug!("logging initialized"),
        Err(err) => tracing::debug!(%err, "logging already initialized"),
    }
}
