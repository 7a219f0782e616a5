//! Парсер DDL инструкций для ddlschema
//!
//! Распознает `CREATE TABLE` и `ALTER TABLE`, разбирает тело `CREATE TABLE`
//! на колонки и объявление первичного ключа и наполняет построители схемы.

use crate::common::{Error, Result};
use crate::parser::scanner::Scanner;
use crate::parser::types::{resolve_sql_type_strict, FieldType};
use crate::schema::TableDescriptorBuilder;
use std::fmt;
use std::path::Path;

const CREATE_TABLE_PREFIX: &str = "CREATE TABLE ";
const ALTER_TABLE_PREFIX: &str = "ALTER TABLE ";
const PRIMARY_KEY_PREFIX: &str = "PRIMARY KEY ";

/// Настройки парсера
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// Максимальная длина фрагмента неподдерживаемой инструкции в диагностике
    pub abbreviation_length: usize,
    /// Строгий режим: неизвестный SQL тип является ошибкой
    pub strict_types: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            abbreviation_length: 30,
            strict_types: false,
        }
    }
}

/// Диагностическое сообщение о пропущенной инструкции
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `ALTER TABLE` распознан, но не применяется
    AlterTableSkipped { type_name: String },
    /// Инструкция не поддерживается
    UnsupportedStatement { preview: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AlterTableSkipped { type_name } => {
                write!(f, "Ignoring ALTER TABLE for '{}'", type_name)
            }
            Diagnostic::UnsupportedStatement { preview } => {
                write!(f, "Unsupported statement skipped: [{}]", preview)
            }
        }
    }
}

/// Парсер DDL текста в набор построителей схемы
#[derive(Debug, Default)]
pub struct DdlParser {
    settings: ParserSettings,
    /// Диагностика последнего вызова `parse`
    diagnostics: Vec<Diagnostic>,
}

impl DdlParser {
    /// Создает парсер с настройками по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Создает парсер с настройками
    pub fn with_settings(settings: ParserSettings) -> Self {
        Self {
            settings,
            diagnostics: Vec::new(),
        }
    }

    /// Получает настройки парсера
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Диагностика, собранная последним вызовом `parse`
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Читает файл целиком и разбирает его содержимое
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<TableDescriptorBuilder>> {
        let path = path.as_ref();
        log::debug!("Reading DDL from {}", path.display());
        let sql = std::fs::read_to_string(path)?;
        self.parse(&sql)
    }

    /// Разбирает текст из нуля или более инструкций, разделенных `;`.
    ///
    /// Результат атомарен: либо все объявления таблиц, либо первая фатальная ошибка.
    pub fn parse(&mut self, sql: &str) -> Result<Vec<TableDescriptorBuilder>> {
        self.diagnostics.clear();
        let mut result = Vec::new();

        for command in sql.split(';') {
            let mut scanner = Scanner::new(command.trim());
            if scanner.starts_with(CREATE_TABLE_PREFIX) {
                result.push(self.parse_create_table(&mut scanner)?);
            } else if scanner.starts_with(ALTER_TABLE_PREFIX) {
                self.parse_alter_table(&mut scanner)?;
            } else if !scanner.is_empty() {
                let preview = scanner
                    .abbreviation(self.settings.abbreviation_length)
                    .into_owned();
                self.report(Diagnostic::UnsupportedStatement { preview });
            }
        }

        log::debug!("Parsed {} table declaration(s)", result.len());
        Ok(result)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::AlterTableSkipped { .. } => log::warn!("{}", diagnostic),
            Diagnostic::UnsupportedStatement { .. } => log::info!("{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }

    fn parse_create_table(&self, sql: &mut Scanner<'_>) -> Result<TableDescriptorBuilder> {
        sql.skip(CREATE_TABLE_PREFIX)?;
        let type_name = sql.read_until_whitespace();
        if type_name.is_empty() {
            return Err(Error::malformed_statement("missing table name after CREATE TABLE"));
        }
        let mut builder = TableDescriptorBuilder::new(type_name);

        // Все, что вне 'create table (...) ...', отбрасывается
        sql.trim_outside_enclosing_pair('(', ')')
            .map_err(|e| match e {
                Error::MalformedStatement { message } => {
                    Error::malformed_statement(format!("table '{}': {}", type_name, message))
                }
                other => other,
            })?;
        if sql.is_empty() {
            return Ok(builder);
        }

        for clause in sql.split_excluding_enclosing_pair(',', '(', ')') {
            if clause.is_empty() {
                return Err(Error::malformed_statement(format!(
                    "empty column clause in table '{}'",
                    type_name
                )));
            }
            if clause.starts_with(PRIMARY_KEY_PREFIX) {
                self.parse_primary_key(clause, &mut builder)?;
            } else {
                self.parse_column(clause, &mut builder)?;
            }
        }

        Ok(builder)
    }

    fn parse_column(&self, clause: &str, builder: &mut TableDescriptorBuilder) -> Result<()> {
        let mut sw = Scanner::new(clause);
        let name = sw.read_until_whitespace();
        sw.trim();
        // NOT NULL, DEFAULT и прочие модификаторы игнорируются
        let sql_type = sw.read_until_whitespace();
        let field_type = self.resolve_type(sql_type, name)?;
        builder.add_field(name, field_type);
        Ok(())
    }

    fn parse_primary_key(&self, clause: &str, builder: &mut TableDescriptorBuilder) -> Result<()> {
        let mut sw = Scanner::new(clause);
        sw.skip(PRIMARY_KEY_PREFIX)?;
        sw.trim();
        let rest = sw.remaining();
        let list = rest
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(rest)
            .trim();

        let columns: Vec<String> = list.split(',').map(|c| c.trim().to_string()).collect();
        if columns.iter().any(|c| c.is_empty()) {
            return Err(Error::malformed_statement(format!(
                "empty column name in primary key of table '{}'",
                builder.type_name()
            )));
        }
        if columns.len() > 1 {
            return Err(Error::unsupported_primary_key(builder.type_name(), columns));
        }
        if let Some(existing) = builder.primary_key() {
            let mut both = vec![existing.to_string()];
            both.extend(columns);
            return Err(Error::unsupported_primary_key(builder.type_name(), both));
        }

        if let Some(column) = columns.into_iter().next() {
            builder.set_primary_key(column);
        }
        Ok(())
    }

    fn parse_alter_table(&mut self, sql: &mut Scanner<'_>) -> Result<()> {
        sql.skip(ALTER_TABLE_PREFIX)?;
        let type_name = sql.read_until_whitespace().to_string();
        self.report(Diagnostic::AlterTableSkipped { type_name });
        Ok(())
    }

    fn resolve_type(&self, sql_type: &str, field: &str) -> Result<FieldType> {
        match resolve_sql_type_strict(sql_type) {
            Ok(field_type) => Ok(field_type),
            Err(e) if self.settings.strict_types => Err(e),
            Err(_) => {
                log::debug!(
                    "Unrecognized SQL type '{}' for field '{}', using {}",
                    sql_type,
                    field,
                    FieldType::Text
                );
                Ok(FieldType::Text)
            }
        }
    }
}
