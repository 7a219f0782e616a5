//! Отображение имен SQL типов в канонические типы полей

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Канонический тип поля схемы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Строки, бинарные данные, идентификаторы и все нераспознанные типы
    Text,
    /// Короткое целое
    Short,
    /// Целое
    Integer,
    /// Длинное целое
    Long,
    /// Число двойной точности
    Double,
    /// Число одинарной точности
    Float,
    /// Десятичное число произвольной точности
    Decimal,
    /// Дата
    Date,
    /// Метка времени
    Timestamp,
    /// Время
    Time,
    /// Логический тип
    Boolean,
}

impl FieldType {
    /// Все канонические типы
    pub const ALL: [FieldType; 11] = [
        FieldType::Text,
        FieldType::Short,
        FieldType::Integer,
        FieldType::Long,
        FieldType::Double,
        FieldType::Float,
        FieldType::Decimal,
        FieldType::Date,
        FieldType::Timestamp,
        FieldType::Time,
        FieldType::Boolean,
    ];

    /// Каноническое имя типа
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Short => "short",
            FieldType::Integer => "integer",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Float => "float",
            FieldType::Decimal => "decimal",
            FieldType::Date => "date",
            FieldType::Timestamp => "timestamp",
            FieldType::Time => "time",
            FieldType::Boolean => "boolean",
        }
    }

    /// Ищет SQL тип в таблице без подстановки типа по умолчанию.
    ///
    /// Суффикс в скобках (`DECIMAL(10,2)`, `CHARACTER(4)`) отбрасывается,
    /// сравнение точное и с учетом регистра.
    pub fn lookup(sql_type: &str) -> Option<FieldType> {
        SQL_TYPE_MAP.get(strip_type_arguments(sql_type)).copied()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::unknown_type(s))
    }
}

/// Таблица синонимов SQL типов различных диалектов.
///
/// Многословные имена не могут прийти из парсера колонок (тип читается до
/// пробела), но доступны при прямом вызове `resolve_sql_type`.
pub const SQL_TYPE_TABLE: &[(&str, FieldType)] = &[
    ("VARCHAR2", FieldType::Text),
    ("NVARCHAR2", FieldType::Text),
    ("NCHAR VARYING", FieldType::Text),
    ("VARCHAR", FieldType::Text),
    ("CHAR", FieldType::Text),
    ("NCHAR", FieldType::Text),
    ("NVARCHAR", FieldType::Text),
    ("SYSNAME", FieldType::Text),
    ("CLOB", FieldType::Text),
    ("RAW", FieldType::Text),
    ("MONEY", FieldType::Text),
    ("SMALLMONEY", FieldType::Text),
    ("TEXT", FieldType::Text),
    ("NTEXT", FieldType::Text),
    ("GRAPHIC", FieldType::Text),
    ("VARGRAPHIC", FieldType::Text),
    ("VARG", FieldType::Text),
    ("VARBINARY", FieldType::Text),
    ("VARBIN", FieldType::Text),
    ("CHARACTER", FieldType::Text),
    ("UNIQUEIDENTIFIER", FieldType::Text),
    ("DECFLOAT", FieldType::Text),
    ("LONG", FieldType::Text),
    ("TINYINT", FieldType::Short),
    ("SMALLINT", FieldType::Short),
    ("INT", FieldType::Integer),
    ("INTEGER", FieldType::Integer),
    ("BIGINT", FieldType::Long),
    ("NUMBER", FieldType::Double),
    ("DOUBLE", FieldType::Double),
    ("DOUBLE PRECISION", FieldType::Double),
    ("REAL", FieldType::Float),
    ("FLOAT", FieldType::Float),
    ("NUMERIC", FieldType::Decimal),
    ("DECIMAL", FieldType::Decimal),
    ("DATE", FieldType::Date),
    ("DATETIME", FieldType::Date),
    ("TIMESTAMP", FieldType::Timestamp),
    ("TIMESTAMP WITH TIME ZONE", FieldType::Timestamp),
    ("TIMESTAMP WITH LOCAL TIME ZONE", FieldType::Timestamp),
    ("TIMESTMP", FieldType::Timestamp),
    ("TIMESTZ", FieldType::Timestamp),
    ("TIME", FieldType::Time),
    ("TIME WITH TIME ZONE", FieldType::Time),
    ("BOOLEAN", FieldType::Boolean),
];

lazy_static::lazy_static! {
    static ref SQL_TYPE_MAP: HashMap<&'static str, FieldType> =
        SQL_TYPE_TABLE.iter().copied().collect();
}

/// Отбрасывает аргументы типа: все, начиная с первой `(`
pub fn strip_type_arguments(sql_type: &str) -> &str {
    match sql_type.find('(') {
        Some(pos) => &sql_type[..pos],
        None => sql_type,
    }
}

/// Определяет канонический тип по имени SQL типа.
///
/// Нераспознанные имена отображаются в `FieldType::Text`.
pub fn resolve_sql_type(sql_type: &str) -> FieldType {
    FieldType::lookup(sql_type).unwrap_or(FieldType::Text)
}

/// Строгий вариант `resolve_sql_type`: нераспознанное имя является ошибкой
pub fn resolve_sql_type_strict(sql_type: &str) -> Result<FieldType> {
    FieldType::lookup(sql_type).ok_or_else(|| Error::unknown_type(sql_type))
}
