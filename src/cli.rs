//! CLI интерфейс для ddlschema
//!
//! Разбирает DDL файлы и печатает полученное описание схемы

use crate::common::{OutputFormat, ParserConfig};
use crate::parser::types::SQL_TYPE_TABLE;
use crate::parser::{DdlParser, FieldType};
use crate::schema::{TableDescriptor, TableDescriptorBuilder};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// ddlschema - преобразование SQL DDL в описание схемы
#[derive(Parser)]
#[command(name = "ddlschema")]
#[command(about = "Translates SQL CREATE TABLE statements into a schema description")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разобрать DDL файл
    Parse {
        /// Путь к файлу с SQL инструкциями
        file: PathBuf,

        /// Считать неизвестные SQL типы ошибкой
        #[arg(long)]
        strict: bool,

        /// Формат вывода (text, json)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Показать таблицу SQL типов
    Types,

    /// Показать информацию о программе
    Info,
}

impl Cli {
    /// Загружает конфигурацию: файл, затем переменные окружения, затем аргументы
    pub fn load_config(&self) -> anyhow::Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => ParserConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ParserConfig::default(),
        };

        config = config.merge(ParserConfig::from_env()?);

        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        if let Some(Commands::Parse { strict, format, .. }) = &self.command {
            if *strict {
                config.strict_types = true;
            }
            if let Some(format) = format {
                config.output_format = format.parse()?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute(&self, config: &ParserConfig) -> anyhow::Result<()> {
        match &self.command {
            Some(Commands::Parse { file, .. }) => self.parse_file(file, config),
            Some(Commands::Types) => {
                print!("{}", render_type_table());
                Ok(())
            }
            Some(Commands::Info) => {
                println!("ddlschema {}", crate::VERSION);
                println!("Strict types: {}", config.strict_types);
                println!("Output format: {:?}", config.output_format);
                Ok(())
            }
            None => {
                println!("ddlschema {}", crate::VERSION);
                println!("Use --help for usage");
                Ok(())
            }
        }
    }

    fn parse_file(&self, file: &Path, config: &ParserConfig) -> anyhow::Result<()> {
        let mut parser = DdlParser::with_settings(config.parser_settings());
        let builders = parser
            .parse_file(file)
            .with_context(|| format!("failed to parse {}", file.display()))?;
        let descriptors = create_descriptors(&builders)?;

        match config.output_format {
            OutputFormat::Text => println!("{}", render_text(&descriptors)),
            OutputFormat::Json => println!("{}", render_json(&descriptors)?),
        }
        Ok(())
    }
}

/// Создает итоговые дескрипторы из построителей
pub fn create_descriptors(builders: &[TableDescriptorBuilder]) -> crate::Result<Vec<TableDescriptor>> {
    builders.iter().map(TableDescriptorBuilder::create).collect()
}

/// Текстовый отчет о разобранных типах
pub fn render_text(descriptors: &[TableDescriptor]) -> String {
    let mut out = format!("Parsed types: {}", descriptors.len());
    for descriptor in descriptors {
        out.push('\n');
        out.push_str(&descriptor.to_string());
    }
    out
}

/// JSON представление разобранных типов
pub fn render_json(descriptors: &[TableDescriptor]) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(descriptors)?)
}

/// Таблица SQL типов, сгруппированная по каноническим типам
pub fn render_type_table() -> String {
    let mut out = String::new();
    for field_type in FieldType::ALL {
        let names: Vec<&str> = SQL_TYPE_TABLE
            .iter()
            .filter(|(_, t)| *t == field_type)
            .map(|(name, _)| *name)
            .collect();
        out.push_str(&format!("{}: {}\n", field_type, names.join(", ")));
    }
    out.push_str("(unrecognized types map to text)\n");
    out
}
