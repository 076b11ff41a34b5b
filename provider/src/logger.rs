use std::sync::OnceLock;

/// Set up log levels and formatting for the binary
pub struct Logger {
    pub level: log::LevelFilter,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

impl<'a> Logger {
    pub fn init() -> &'a Self {
        LOGGER.get_or_init(|| {
            let logger = env_logger::Builder::from_env(
                // Only warnings by default, e.g. a webhook stack left without its notification
                // Show remote calls with "export RUST_LOG=debug"
                env_logger::Env::default().default_filter_or("warn"),
            )
            .build();

            let level = logger.filter();

            // Keep the logger of an embedding process if it has one
            if log::set_boxed_logger(Box::new(logger)).is_ok() {
                log::set_max_level(level);
            }

            Self { level }
        })
    }
}
