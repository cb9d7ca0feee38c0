//! Unified test logging initialization.
//!
//! One init function shared by every test target so log capture behaves the
//! same under `cargo test` and nextest.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; may be called from any number of test binaries.
/// The filter is taken from `TEST_LOG`, then `RUST_LOG`, then defaults to
/// `"warn"`. Uses `with_test_writer()` so output is captured per test, and
/// `without_time()` for stable output.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
