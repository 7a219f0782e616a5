//! Обработка ошибок для ddlschema

use thiserror::Error;

/// Основной тип ошибки для ddlschema
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Некорректная инструкция (несбалансированные скобки, нет имени таблицы и т.п.)
    #[error("Malformed statement: {message}")]
    MalformedStatement { message: String },

    /// Составной или повторный первичный ключ
    #[error("Unsupported primary key for table '{table}': [{}]", .columns.join(", "))]
    UnsupportedPrimaryKey { table: String, columns: Vec<String> },

    /// Неизвестный SQL тип (только в строгом режиме)
    #[error("Unknown SQL type: '{type_name}'")]
    UnknownType { type_name: String },

    /// Ошибка валидации
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для ddlschema
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку некорректной инструкции
    pub fn malformed_statement(message: impl Into<String>) -> Self {
        Self::MalformedStatement {
            message: message.into(),
        }
    }

    /// Создает ошибку неподдерживаемого первичного ключа
    pub fn unsupported_primary_key(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self::UnsupportedPrimaryKey {
            table: table.into(),
            columns,
        }
    }

    /// Создает ошибку неизвестного типа
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Создает ошибку валидации
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
