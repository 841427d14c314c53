use log::LevelFilter;

/// Initialize the logger; `RUST_LOG` can still refine per-module levels.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
