//! Парсер DDL для ddlschema

pub mod ddl;
pub mod scanner;
pub mod types;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use ddl::{DdlParser, Diagnostic, ParserSettings};
pub use scanner::Scanner;
pub use types::{resolve_sql_type, resolve_sql_type_strict, FieldType};
