use std::{fs, path::Path};

use tracing_appender::{non_blocking, non_blocking::WorkerGuard};
use tracing_subscriber::{fmt, layer::Layer as LayerTrait, registry::LookupSpan};

use crate::error::LoggingError;

/// File layer: дописывает в `path`, без ANSI, через non-blocking writer.
pub fn layer_with_config<S>(
    path: &Path
) -> Result<(Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard), LoggingError>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let (non_blocking_writer, guard) = non_blocking(file);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer);

    Ok((Box::new(layer), guard))
}
