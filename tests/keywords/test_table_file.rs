// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Loading keyword tables from disk

use fabstir_seo_auditor::{KeywordTable, KeywordTableError};
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_grouped_table() {
    let file = csv_file(
        "url,primary kw,secundary kw\n\
         https://shop.example/spades,garden spade,steel spade\n\
         ,,border spade\n\
         https://shop.example/rakes,leaf rake,\n\
         ,,lawn rake\n\
         ,,\n",
    );

    let table = KeywordTable::from_path(file.path()).unwrap();
    assert_eq!(table.len(), 2);

    let spades = table.get("https://shop.example/spades").unwrap();
    assert_eq!(spades.primary, "garden spade");
    assert_eq!(spades.secondary, vec!["steel spade", "border spade"]);

    let rakes = table.get("https://shop.example/rakes").unwrap();
    assert_eq!(rakes.secondary, vec!["lawn rake"]);
}

#[test]
fn test_load_table_with_byte_order_mark() {
    let file = csv_file("\u{feff}url,primary kw,secundary kw\nhttps://a.example,x,y\n");
    let table = KeywordTable::from_path(file.path()).unwrap();
    assert!(table.contains("https://a.example"));
}

#[test]
fn test_quoted_fields_with_commas() {
    let file = csv_file(
        "url,primary kw,secundary kw\n\
         https://a.example,\"tools, garden\",\"spades, steel\"\n",
    );
    let table = KeywordTable::from_path(file.path()).unwrap();
    let a = table.get("https://a.example").unwrap();
    assert_eq!(a.primary, "tools, garden");
    assert_eq!(a.secondary, vec!["spades, steel"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = KeywordTable::from_path("/nonexistent/keywords.csv");
    assert!(matches!(result, Err(KeywordTableError::Io(_))));
}

#[test]
fn test_missing_primary_column() {
    let file = csv_file("url,secundary kw\nhttps://a.example,y\n");
    let result = KeywordTable::from_path(file.path());
    assert!(matches!(result, Err(KeywordTableError::MissingColumn("primary kw"))));
}
