//! Тесты парсера DDL

mod scanner_tests;
