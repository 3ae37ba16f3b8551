use env_logger::Env;

const DEFAULT_FILTER: &str = "warn";

/// Install the log backend. Both backends write to stderr so stdout carries
/// only result lines.
pub fn init(use_tracing: bool) {
    if use_tracing {
        init_tracing();
    } else {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
            .target(env_logger::Target::Stderr)
            .try_init();
    }
}

fn init_tracing() {
    // log:: records from the library are forwarded into tracing
    let _ = tracing_log::LogTracer::init();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
