//! Интеграционные тесты ddlschema
//!
//! Разбор DDL из файлов и создание итоговых дескрипторов

use ddlschema::cli::{create_descriptors, render_json, render_text};
use ddlschema::{DdlParser, Diagnostic, Error, FieldType, ParserSettings};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn example_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/ddl-example.sql")
}

/// Тест разбора полного примера схемы
#[test]
fn test_parse_example_schema() {
    let mut parser = DdlParser::new();
    let builders = parser.parse_file(example_path()).unwrap();

    let names: Vec<&str> = builders.iter().map(|b| b.type_name()).collect();
    assert_eq!(names, vec!["REGIONS", "COUNTRIES", "EMPLOYEES"]);

    let descriptors = create_descriptors(&builders).unwrap();
    let employees = &descriptors[2];
    assert_eq!(employees.fields.len(), 8);
    assert_eq!(employees.primary_key.as_deref(), Some("EMPLOYEE_ID"));
    assert_eq!(employees.field("SALARY").unwrap().field_type, FieldType::Decimal);
    assert_eq!(employees.field("HIRE_DATE").unwrap().field_type, FieldType::Date);
    assert_eq!(employees.field("COMMISSION_PCT").unwrap().field_type, FieldType::Float);
    assert_eq!(employees.field("ACTIVE").unwrap().field_type, FieldType::Boolean);
    assert_eq!(employees.field("UPDATED_AT").unwrap().field_type, FieldType::Timestamp);

    let regions = &descriptors[0];
    assert_eq!(regions.field("REGION_ID").unwrap().field_type, FieldType::Double);
    assert_eq!(regions.field("REGION_NAME").unwrap().field_type, FieldType::Text);
}

/// Тест диагностики для пропущенных инструкций
#[test]
fn test_example_schema_diagnostics() {
    let mut parser = DdlParser::new();
    parser.parse_file(example_path()).unwrap();

    assert_eq!(
        parser.diagnostics(),
        &[
            Diagnostic::AlterTableSkipped {
                type_name: "EMPLOYEES".to_string()
            },
            Diagnostic::UnsupportedStatement {
                preview: "CREATE INDEX EMP_NAME_IX ON EM...".to_string()
            },
        ]
    );
}

/// ALTER TABLE не меняет ранее объявленную таблицу
#[test]
fn test_alter_table_does_not_modify_earlier_table() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "CREATE TABLE t (a INT);").unwrap();
    writeln!(file, "ALTER TABLE t ADD COLUMN c INT;").unwrap();

    let mut parser = DdlParser::new();
    let builders = parser.parse_file(file.path()).unwrap();

    assert_eq!(builders.len(), 1);
    assert_eq!(builders[0].fields().len(), 1);
    assert_eq!(builders[0].fields()[0].name, "a");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut parser = DdlParser::new();
    let result = parser.parse_file(dir.path().join("absent.sql"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_composite_key_in_file_returns_no_tables() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "CREATE TABLE a (x INT);\nCREATE TABLE b (x INT, y INT, PRIMARY KEY (x, y));"
    )
    .unwrap();

    let mut parser = DdlParser::new();
    match parser.parse_file(file.path()) {
        Err(Error::UnsupportedPrimaryKey { table, .. }) => assert_eq!(table, "b"),
        other => panic!("Ожидалась ошибка составного ключа, получено {:?}", other),
    }
}

#[test]
fn test_strict_mode_on_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "CREATE TABLE t (a INT, b GEOMETRY)").unwrap();

    let mut lenient = DdlParser::new();
    let builders = lenient.parse_file(file.path()).unwrap();
    assert_eq!(builders[0].fields()[1].field_type, FieldType::Text);

    let mut strict = DdlParser::with_settings(ParserSettings {
        strict_types: true,
        ..ParserSettings::default()
    });
    assert!(matches!(
        strict.parse_file(file.path()),
        Err(Error::UnknownType { .. })
    ));
}

#[test]
fn test_render_outputs() {
    let mut parser = DdlParser::new();
    let builders = parser
        .parse("CREATE TABLE flags (id SMALLINT, on_off BOOLEAN, PRIMARY KEY (id))")
        .unwrap();
    let descriptors = create_descriptors(&builders).unwrap();

    let text = render_text(&descriptors);
    assert!(text.starts_with("Parsed types: 1\nType: flags\n"));
    assert!(text.contains("  Property: on_off [boolean]"));

    let json: serde_json::Value = serde_json::from_str(&render_json(&descriptors).unwrap()).unwrap();
    assert_eq!(json[0]["type_name"], "flags");
    assert_eq!(json[0]["fields"][0]["field_type"], "short");
    assert_eq!(json[0]["primary_key"], "id");
}

#[test]
fn test_create_rejects_primary_key_on_unknown_column() {
    let mut parser = DdlParser::new();
    let builders = parser.parse("CREATE TABLE t (a INT, PRIMARY KEY (b))").unwrap();
    assert_eq!(builders[0].primary_key(), Some("b"));
    assert!(matches!(
        create_descriptors(&builders),
        Err(Error::Validation { .. })
    ));
}
