// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the crate logs at `info`, or at
//! `debug` with `--verbose`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive.
pub const DEFAULT_FILTER: &str = "podium=info";

/// Filter directive used with `--verbose`.
pub const VERBOSE_FILTER: &str = "podium=debug,warn";

/// Installs the global subscriber. Call once, before the application starts.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
