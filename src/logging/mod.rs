pub mod config;
mod filters;
mod formatter;
pub mod handle;
pub mod sinks;

pub use config::{LogFormat, LoggingConfig};
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LoggingError;

/// Инициализация логирования с конфигурацией.
///
/// Повторный вызов в том же процессе вернёт `LoggingError::Init`.
pub fn init_logging(config: LoggingConfig) -> Result<LoggingHandle, LoggingError> {
    config.validate()?;

    let env_filter = filters::build_filter_from_config(&config);
    let mut layers = Vec::new();

    // Console layer
    layers.push(sinks::console::layer_with_config(&config));

    // File layer
    let file_guard = match &config.file {
        Some(path) => {
            let (file_layer, guard) = sinks::file::layer_with_config(path)?;
            layers.push(file_layer);
            Some(guard)
        }
        None => None,
    };

    // Initialize subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_format = ?config.format,
        file_enabled = config.file.is_some(),
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
