use std::path::PathBuf;

use serde::Deserialize;

use crate::error::LoggingError;

/// Допустимые уровни логирования.
const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Формат вывода логов.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Однострочный формат
    #[default]
    Compact,
    /// Многострочный человекочитаемый формат
    Pretty,
    /// JSON, по объекту на строку
    Json,
}

/// Конфигурация логирования.
///
/// Консольные логи пишутся в stderr: stdout занят отчётом.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Уровень для событий этого крейта
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    /// Дополнительный файл для логов (без ANSI)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Директива для `EnvFilter`: чужие крейты только warn.
    pub fn build_filter_directive(&self) -> String {
        format!("warn,{}={}", env!("CARGO_CRATE_NAME"), self.level)
    }

    pub fn validate(&self) -> Result<(), LoggingError> {
        if LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(LoggingError::InvalidLevel(self.level.clone()))
        }
    }
}
