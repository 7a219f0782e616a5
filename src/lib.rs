//! ddlschema - преобразование SQL DDL в описание схемы
//!
//! Разбирает ограниченный диалект DDL (`CREATE TABLE`, `ALTER TABLE`,
//! `PRIMARY KEY`) в набор описаний типов записей: имя типа, упорядоченный
//! список типизированных полей и поле первичного ключа.
//!
//! ```
//! use ddlschema::{DdlParser, FieldType};
//!
//! let mut parser = DdlParser::new();
//! let tables = parser.parse("CREATE TABLE t (a INT, PRIMARY KEY (a))").unwrap();
//! assert_eq!(tables[0].fields()[0].field_type, FieldType::Integer);
//! assert_eq!(tables[0].primary_key(), Some("a"));
//! ```

pub mod cli;
pub mod common;
pub mod parser;
pub mod schema;

pub use common::error::{Error, Result};
pub use parser::{DdlParser, Diagnostic, FieldType, ParserSettings};
pub use schema::{FieldDescriptor, TableDescriptor, TableDescriptorBuilder};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
