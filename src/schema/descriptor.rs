//! Дескрипторы типов записей и их построитель
//!
//! Парсер только наполняет `TableDescriptorBuilder`; итоговый
//! `TableDescriptor` создается и проверяется вызывающей стороной.

use crate::common::{Error, Result};
use crate::parser::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Описание поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
}

/// Готовое описание типа записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
    pub primary_key: Option<String>,
}

impl TableDescriptor {
    /// Ищет поле по имени
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl fmt::Display for TableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}", self.type_name)?;
        for field in &self.fields {
            write!(f, "\n  Property: {} [{}]", field.name, field.field_type)?;
        }
        if let Some(pk) = &self.primary_key {
            write!(f, "\n  Primary key: {}", pk)?;
        }
        Ok(())
    }
}

/// Построитель описания типа записи
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptorBuilder {
    type_name: String,
    fields: Vec<FieldDescriptor>,
    primary_key: Option<String>,
}

impl TableDescriptorBuilder {
    /// Создает построитель для типа с заданным именем
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            primary_key: None,
        }
    }

    /// Добавляет поле, сохраняя порядок объявления
    pub fn add_field(&mut self, name: impl Into<String>, field_type: FieldType) -> &mut Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            field_type,
        });
        self
    }

    /// Задает поле первичного ключа
    pub fn set_primary_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.primary_key = Some(name.into());
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Проверяет собранное описание и создает `TableDescriptor`
    pub fn create(&self) -> Result<TableDescriptor> {
        if self.type_name.is_empty() {
            return Err(Error::validation("type name cannot be empty"));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::validation(format!(
                    "duplicate field '{}' in type '{}'",
                    field.name, self.type_name
                )));
            }
        }

        if let Some(pk) = &self.primary_key {
            if !seen.contains(pk.as_str()) {
                return Err(Error::validation(format!(
                    "primary key '{}' is not a field of type '{}'",
                    pk, self.type_name
                )));
            }
        }

        Ok(TableDescriptor {
            type_name: self.type_name.clone(),
            fields: self.fields.clone(),
            primary_key: self.primary_key.clone(),
        })
    }
}
