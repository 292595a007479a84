use env_logger::Env;

/// Installs env_logger. `RUST_LOG` wins over the configured level when set.
pub fn init(level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .try_init();
}
