use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "rent_ledger_rs=info";

/// Initializes the global tracing subscriber and emits a startup info log.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

        // another subscriber may already be installed by the host application
        let _ = fmt().with_env_filter(build_filter(rust_log.as_deref())).try_init();
        tracing::info!("rent ledger tracing initialized");
    });
}

fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
