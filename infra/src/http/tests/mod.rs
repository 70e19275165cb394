//! Tests for the resilient HTTP client

pub(crate) mod mocks;

mod client_tests;

/// Route test logs through the capture-aware writer; safe to call repeatedly
pub(crate) fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
