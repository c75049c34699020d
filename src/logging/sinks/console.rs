/// Возвращаем boxed trait-объект — согласованно с build_formatter_from_config.
use tracing_subscriber::layer::Layer as LayerTrait;
use tracing_subscriber::registry::LookupSpan;

use crate::logging::{config::LoggingConfig, formatter};

/// Create console layer с конфигурацией
pub fn layer_with_config<S>(config: &LoggingConfig) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    formatter::build_formatter_from_config(config, config.with_ansi)
}
