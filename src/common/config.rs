//! Конфигурация для ddlschema
//!
//! Настройки парсера и утилиты командной строки. Загружаются из TOML файла
//! и/или переменных окружения.

use crate::common::{Error, Result};
use crate::parser::ParserSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

const DEFAULT_ABBREVIATION_LENGTH: usize = 30;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Формат вывода результатов разбора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Человекочитаемый текст
    #[default]
    Text,
    /// JSON массив дескрипторов
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::configuration(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Основная конфигурация
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Длина фрагмента неподдерживаемой инструкции в диагностике
    pub abbreviation_length: usize,
    /// Строгий режим разбора типов
    pub strict_types: bool,
    /// Уровень логирования
    pub log_level: String,
    /// Формат вывода
    pub output_format: OutputFormat,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            abbreviation_length: DEFAULT_ABBREVIATION_LENGTH,
            strict_types: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl ParserConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Строит конфигурацию по функции поиска переменных
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = ParserConfig::default();

        if let Some(length) = lookup("DDLSCHEMA_ABBREVIATION_LENGTH") {
            config.abbreviation_length = length.parse().map_err(|_| {
                Error::configuration(format!("invalid DDLSCHEMA_ABBREVIATION_LENGTH '{}'", length))
            })?;
        }

        if let Some(strict) = lookup("DDLSCHEMA_STRICT_TYPES") {
            config.strict_types = strict.parse().map_err(|_| {
                Error::configuration(format!("invalid DDLSCHEMA_STRICT_TYPES '{}'", strict))
            })?;
        }

        if let Some(level) = lookup("DDLSCHEMA_LOG_LEVEL") {
            config.log_level = level;
        }

        if let Some(format) = lookup("DDLSCHEMA_OUTPUT_FORMAT") {
            config.output_format = format.parse()?;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой: значения `other`, отличные от
    /// значений по умолчанию, имеют приоритет
    pub fn merge(mut self, other: Self) -> Self {
        if other.abbreviation_length != DEFAULT_ABBREVIATION_LENGTH {
            self.abbreviation_length = other.abbreviation_length;
        }
        if other.strict_types {
            self.strict_types = true;
        }
        if other.log_level != DEFAULT_LOG_LEVEL {
            self.log_level = other.log_level;
        }
        if other.output_format != OutputFormat::Text {
            self.output_format = other.output_format;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.abbreviation_length == 0 {
            return Err(Error::configuration(
                "abbreviation length must be greater than 0",
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Настройки парсера, соответствующие конфигурации
    pub fn parser_settings(&self) -> ParserSettings {
        ParserSettings {
            abbreviation_length: self.abbreviation_length,
            strict_types: self.strict_types,
        }
    }
}
