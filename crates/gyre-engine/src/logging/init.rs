use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "gyre_engine=debug"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Explicit(String),
    Environment(String),
    Level(log::LevelFilter),
}

fn filter_source(config: &LoggingConfig, env: Option<String>) -> FilterSource {
    let non_empty = |s: &String| !s.trim().is_empty();
    if let Some(filter) = config.env_filter.clone().filter(non_empty) {
        FilterSource::Explicit(filter)
    } else if let Some(filter) = env.filter(non_empty) {
        FilterSource::Environment(filter)
    } else {
        FilterSource::Level(config.default_level)
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`, before the window
/// runtime starts.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let source = filter_source(&config, std::env::var("RUST_LOG").ok());
        match &source {
            FilterSource::Explicit(filter) | FilterSource::Environment(filter) => {
                builder.parse_filters(filter);
            }
            FilterSource::Level(level) => {
                builder.filter_level(*level);
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized ({source:?})");
    });
}
