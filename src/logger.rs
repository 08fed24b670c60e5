use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` still applies on top of the level, so single modules can be
/// turned up, e.g. `RUST_LOG=raysphere::scene=trace`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
