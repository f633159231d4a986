use std::env;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber once per test binary.
pub fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}
