//! Diagnostic tracing for the command-line tool.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=cubecheck=debug cubecheck verify --state cube.txt --moves "R U"
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
