const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Install the global `tracing` subscriber. `log` records from the library
/// are forwarded to it. Logs go to stderr since the generated module may be
/// written to stdout.
pub(crate) fn init(verbose: bool) {
    let (log_level, warning) =
        if verbose {
            (tracing::Level::DEBUG, None)
        } else {
            resolve_log_level(std::env::var("LOG_LEVEL").ok().as_deref())
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Maps a `LOG_LEVEL` value to a level, plus a warning when the value is not
/// recognized.
pub(crate) fn resolve_log_level(
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(val) => match val.to_ascii_lowercase().as_str() {
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "error" => (tracing::Level::ERROR, None),
            "info" => (tracing::Level::INFO, None),
            "trace" => (tracing::Level::TRACE, None),
            "warn" => (tracing::Level::WARN, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{val}`"
                )),
            ),
        },
    }
}
