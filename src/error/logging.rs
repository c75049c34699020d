use std::io;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Log file error: {0}")]
    Io(#[from] io::Error),

    #[error("Logging already initialized: {0}")]
    Init(#[from] TryInitError),
}
