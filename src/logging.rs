use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber for the binary.
///
/// Verbosity 0 logs warnings, 1 info, 2 debug, 3 and up trace. `RUST_LOG`
/// takes precedence when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("monthgrid={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
