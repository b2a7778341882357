//! Tracing setup for hosts of the recipe catalog.
//!
//! Catalog mutations and ignored unknown ids are logged at `debug`;
//! recipe imports and config saves at `info`. Everything goes to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level applied to the catalog crates when nothing is configured
pub const DEFAULT_LEVEL: &str = "info";

/// Install the subscriber at `DEFAULT_LEVEL`
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Install the subscriber with `level` for the catalog crates
///
/// Dependencies stay at `warn`. RUST_LOG replaces the whole filter.
/// A second call is ignored.
pub fn init_with_level(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)))
}

fn directives(level: &str) -> String {
    format!("warn,recipe_core={level},recipes={level}", level = level.trim())
}

/// Route catalog events to the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(directives("debug")))
        .try_init();
}
