use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::{
    logging::{LogFormat, LoggingConfig},
    spell::LoadPolicy,
};

/// Префикс переменных окружения (`SKIPDICT_SEED`, `SKIPDICT_LOG_LEVEL`, ...).
pub const ENV_PREFIX: &str = "SKIPDICT";

/// Настройки, которые можно задать через окружение.
///
/// Аргументы командной строки имеют приоритет над ними.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed генератора уровней; без него — энтропия ОС
    pub seed: Option<u64>,
    /// Отвергать словарь с пустыми строками
    pub strict_dictionary: bool,
    pub log_level: String,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            strict_dictionary: false,
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_prefix(ENV_PREFIX)
    }

    pub fn load_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("strict_dictionary", false)?
            .set_default("log_level", "warn")?
            .set_default("log_format", "compact")?
            // Добавляем переменные окружения с префиксом
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?;

        // Десериализуем конфигурацию в нашу структуру
        cfg.try_deserialize()
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict_dictionary {
            LoadPolicy::Reject
        } else {
            LoadPolicy::Skip
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            file: self.log_file.clone(),
            ..Default::default()
        }
    }
}
