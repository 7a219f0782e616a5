//! Общие типы и утилиты для ddlschema

pub mod config;
pub mod error;

pub use config::{OutputFormat, ParserConfig};
pub use error::{Error, Result};
