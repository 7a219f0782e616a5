//! Тесты для сканера с учетом вложенности

use crate::common::Error;
use crate::parser::Scanner;

#[test]
fn test_starts_with_is_case_sensitive() {
    let scanner = Scanner::new("CREATE TABLE t (a INT)");
    assert!(scanner.starts_with("CREATE TABLE "));
    assert!(!scanner.starts_with("create table "));
}

#[test]
fn test_skip_prefix() {
    let mut scanner = Scanner::new("CREATE TABLE t");
    scanner.skip("CREATE TABLE ").unwrap();
    assert_eq!(scanner.remaining(), "t");
}

#[test]
fn test_skip_mismatched_prefix_fails() {
    let mut scanner = Scanner::new("DROP TABLE t");
    let err = scanner.skip("CREATE TABLE ").unwrap_err();
    assert!(matches!(err, Error::MalformedStatement { .. }));
    assert_eq!(scanner.remaining(), "DROP TABLE t");
}

#[test]
fn test_skip_chars() {
    let mut scanner = Scanner::new("äbc");
    scanner.skip_chars(1);
    assert_eq!(scanner.remaining(), "bc");
    scanner.skip_chars(10);
    assert!(scanner.is_empty());
}

#[test]
fn test_read_until_whitespace() {
    let mut scanner = Scanner::new("name   VARCHAR(10) NOT NULL");
    assert_eq!(scanner.read_until_whitespace(), "name");
    assert_eq!(scanner.remaining(), "VARCHAR(10) NOT NULL");
    assert_eq!(scanner.read_until_whitespace(), "VARCHAR(10)");
    assert_eq!(scanner.remaining(), "NOT NULL");
}

#[test]
fn test_read_until_whitespace_without_whitespace() {
    let mut scanner = Scanner::new("INTEGER");
    assert_eq!(scanner.read_until_whitespace(), "INTEGER");
    assert!(scanner.is_empty());
    assert_eq!(scanner.read_until_whitespace(), "");
}

#[test]
fn test_trim() {
    let mut scanner = Scanner::new("  \t a b \n ");
    scanner.trim();
    assert_eq!(scanner.remaining(), "a b");
}

#[test]
fn test_index_of_enclosing_pair() {
    let scanner = Scanner::new("t (a DECIMAL(10,2), b INT) suffix");
    assert_eq!(scanner.index_of_enclosing_pair('(', ')'), Some(25));
}

#[test]
fn test_index_of_enclosing_pair_unbalanced() {
    let scanner = Scanner::new("t (a DECIMAL(10,2), b INT");
    assert_eq!(scanner.index_of_enclosing_pair('(', ')'), None);

    let scanner = Scanner::new("no brackets here");
    assert_eq!(scanner.index_of_enclosing_pair('(', ')'), None);
}

#[test]
fn test_trim_outside_enclosing_pair() {
    let mut scanner = Scanner::new("t ( a INT, b VARCHAR(10) ) WITH (fillfactor=70)");
    scanner.trim_outside_enclosing_pair('(', ')').unwrap();
    assert_eq!(scanner.remaining(), "a INT, b VARCHAR(10)");
}

#[test]
fn test_trim_outside_enclosing_pair_unbalanced() {
    let mut scanner = Scanner::new("t (a INT, b VARCHAR(10)");
    let err = scanner.trim_outside_enclosing_pair('(', ')').unwrap_err();
    assert!(matches!(err, Error::MalformedStatement { .. }));
}

#[test]
fn test_index_of_excluding_enclosing_pair() {
    let scanner = Scanner::new("a DECIMAL(10,2), b INT");
    assert_eq!(scanner.index_of_excluding_enclosing_pair(',', '(', ')'), Some(15));

    let scanner = Scanner::new("a DECIMAL(10,2)");
    assert_eq!(scanner.index_of_excluding_enclosing_pair(',', '(', ')'), None);
}

#[test]
fn test_split_excluding_enclosing_pair() {
    let mut scanner = Scanner::new("a DECIMAL(10,2) , b VARCHAR(in, weird),c INT");
    let segments = scanner.split_excluding_enclosing_pair(',', '(', ')');
    assert_eq!(
        segments,
        vec!["a DECIMAL(10,2)", "b VARCHAR(in, weird)", "c INT"]
    );
    assert!(scanner.is_empty());
}

#[test]
fn test_split_nested_pairs() {
    let mut scanner = Scanner::new("x CHECK (f(a, (b, c))), y INT");
    let segments = scanner.split_excluding_enclosing_pair(',', '(', ')');
    assert_eq!(segments, vec!["x CHECK (f(a, (b, c)))", "y INT"]);
}

#[test]
fn test_split_empty_buffer_yields_one_segment() {
    let mut scanner = Scanner::new("");
    let segments = scanner.split_excluding_enclosing_pair(',', '(', ')');
    assert_eq!(segments, vec![""]);
}

#[test]
fn test_split_trailing_separator() {
    let mut scanner = Scanner::new("a INT,");
    let segments = scanner.split_excluding_enclosing_pair(',', '(', ')');
    assert_eq!(segments, vec!["a INT", ""]);
}

#[test]
fn test_abbreviation() {
    let scanner = Scanner::new("DROP TABLE t");
    assert_eq!(scanner.abbreviation(30), "DROP TABLE t");
    assert_eq!(scanner.abbreviation(4), "DROP...");
    assert_eq!(scanner.abbreviation(12), "DROP TABLE t");
}
