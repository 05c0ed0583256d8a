//! Command-line surface shared by the binaries.

pub mod args;

/// Initialises `env_logger`, preferring an explicit verbosity over `RUST_LOG`.
pub fn init_logging(verbosity: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(level) = verbosity {
        builder.parse_filters(level);
    }

    builder.format_timestamp_micros().init();
}
