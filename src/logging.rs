use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `MSH_LOG=msh=trace`.
pub const LOG_ENV: &str = "MSH_LOG";

/// Installs the stderr subscriber when `--debug` is given or [`LOG_ENV`] is
/// set. Otherwise nothing is installed and stderr stays reserved for the
/// generic error message.
pub fn init(debug: bool) {
    let filter = match (EnvFilter::try_from_env(LOG_ENV), debug) {
        (Ok(filter), _) => filter,
        (Err(_), true) => EnvFilter::new("debug"),
        (Err(_), false) => return,
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("msh: logging disabled: {}", e);
    }
}
