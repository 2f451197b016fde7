//! Test utilities for tabmatrix tests
//!
//! Shared fixtures and logging setup, available to unit tests and, through
//! the `test-utils` feature, to integration tests.
use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub mod fixtures;

static TRACING_INIT: Once = Once::new();

/// Installs a fmt subscriber writing to the test output.
///
/// Defaults to `warn`; set `RUST_LOG=tabmatrix=debug` to follow matrix
/// mutations and query selections. Safe to call from every test.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
