//! Описание схемы, получаемое из DDL

pub mod descriptor;

pub use descriptor::{FieldDescriptor, TableDescriptor, TableDescriptorBuilder};
