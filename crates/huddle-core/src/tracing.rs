use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing for a service. Call once at startup.
///
/// `RUST_LOG` wins when set. Without it the service's own crate logs at
/// `info` and everything else stays at `warn`, so sea-orm query noise does
/// not drown session events.
///
/// Safe to call multiple times, later calls are silently ignored.
pub fn init_tracing(service: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(service)));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(service, "tracing initialized");
    }
}

// Crate names use underscores in tracing targets.
fn default_directives(service: &str) -> String {
    format!("warn,{}=info", service.replace('-', "_"))
}
