use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for CLI runs. `RUST_LOG` wins when set.
///
/// Events go to stderr so stdout stays machine-readable for json/csv output.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
