use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
///
/// Diagnostics share stderr with log output, so the default stays at `warn`
/// and nothing the crate logs per line shows up unless asked for.
pub const DEFAULT_FILTER: &str = "canon_date=warn";

/// Builds the filter, letting `RUST_LOG` override [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing to stderr.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
}
