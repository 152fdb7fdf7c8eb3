use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr; stdout only ever carries the result or usage line.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = match (verbose, level) {
        (true, _) => "powcalc=debug".to_string(),
        (false, Some(level)) => level.to_string(),
        (false, None) => "powcalc=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("powcalc=warn"));

    // try_init: tests may spin up more than one subscriber per process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
