//! ワークブック読み込みの統合テスト
//!
//! rust_xlsxwriter で作成したExcelを calamine で読み込み、
//! 検索 → 選択 → 明細抽出までを検証

use ota_search::config::Config;
use ota_search::error::OtaSearchError;
use ota_search::workbook::{load_table, TableCache};
use ota_search_common::values_for_key;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

/// 見出し + データ行をシートに書き込む
fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<&str>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).expect("シート名設定失敗");
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32, c as u16, *value).expect("書き込み失敗");
                }
            }
        }
    }
    workbook.save(path).expect("Excel保存失敗");
}

fn ota_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["OTA Name", "Detail"],
        vec!["Booking.com", "1.EXPG: channelid=123; available=10"],
        vec!["Agoda", "channelid=900; Mapping: manual"],
        vec!["Booking.com", "channelid=124"],
        vec!["", "orphan=1"],
        vec!["Expedia", "Free text only"],
    ]
}

/// 1件のレコードから検索・抽出まで
#[test]
fn test_end_to_end_single_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("XY.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec!["OTA Name", "Detail"],
                vec!["Booking.com", "1.EXPG: channelid=123; available=10"],
            ],
        )],
    );

    let table = load_table(&path, "Sheet1", &Config::default()).expect("読み込み失敗");
    let outcome = table.search("book");
    assert_eq!(outcome.selected(), Some("Booking.com"));

    let details = table.details("Booking.com");
    assert_eq!(details.rows.len(), 1);
    let fields = &details.rows[0].fields;
    assert_eq!(fields.get("channelid"), Some("123"));
    assert_eq!(fields.get("available"), Some("10"));
}

#[test]
fn test_load_multiple_rows_per_ota() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("XY.xlsx");
    write_workbook(&path, &[("Sheet1", ota_rows())]);

    let table = load_table(&path, "Sheet1", &Config::default()).expect("読み込み失敗");
    assert_eq!(table.records.len(), 4, "OTA名が空の行は除外される");
    assert_eq!(table.names(), vec!["Agoda", "Booking.com", "Expedia"]);

    let details = table.details("booking.com");
    assert_eq!(details.rows.len(), 2);
    assert_eq!(values_for_key(&details, "channelid"), vec!["123", "124"]);
    assert_eq!(details.detected_keys, vec!["channelid", "available", "expg"]);
}

#[test]
fn test_spoken_query_and_no_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("XY.xlsx");
    write_workbook(&path, &[("Sheet1", ota_rows())]);

    let table = load_table(&path, "Sheet1", &Config::default()).expect("読み込み失敗");
    assert_eq!(table.search("booking dot com").selected(), Some("Booking.com"));
    assert!(table.search("trivago").is_no_results());
    assert_eq!(table.search("").names().len(), 3);
}

/// 指定シートがない場合は先頭シート
#[test]
fn test_sheet_fallback() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.xlsx");
    write_workbook(
        &path,
        &[
            ("OTA", ota_rows()),
            ("Archive", vec![vec!["OTA Name", "Detail"], vec!["Old", "x=1"]]),
        ],
    );

    let table = load_table(&path, "Sheet1", &Config::default()).expect("読み込み失敗");
    assert_eq!(table.sheet, "OTA");

    let archive = load_table(&path, "Archive", &Config::default()).expect("読み込み失敗");
    assert_eq!(archive.names(), vec!["Old"]);
}

/// 数値セルは小数部なしの文字列になる
#[test]
fn test_numeric_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("numbers.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1").unwrap();
    sheet.write_string(0, 0, "OTAName").unwrap();
    sheet.write_string(0, 1, "Details").unwrap();
    sheet.write_string(1, 0, "Agoda").unwrap();
    sheet.write_number(1, 1, 42).unwrap();
    workbook.save(&path).unwrap();

    let table = load_table(&path, "Sheet1", &Config::default()).expect("読み込み失敗");
    assert_eq!(table.records[0].annotations[0].text, "42");
}

#[test]
fn test_header_only_sheet_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.xlsx");
    write_workbook(&path, &[("Sheet1", vec![vec!["OTA Name", "Detail"]])]);

    let result = load_table(&path, "Sheet1", &Config::default());
    assert!(matches!(result, Err(OtaSearchError::EmptySheet(_))));
}

#[test]
fn test_invalid_workbook_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"not a zip").unwrap();

    let result = load_table(&path, "Sheet1", &Config::default());
    assert!(matches!(result, Err(OtaSearchError::Workbook(_))));
}

/// 同じ (パス, シート) は再読み込みしない
#[test]
fn test_cache_reuses_loaded_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("XY.xlsx");
    write_workbook(&path, &[("Sheet1", ota_rows())]);

    let config = Config::default();
    let mut cache = TableCache::new();
    let first = cache.get_or_load(&path, "Sheet1", &config).expect("読み込み失敗");

    // ファイルを書き換えてもキャッシュの内容が返る
    write_workbook(&path, &[("Sheet1", vec![vec!["OTA Name", "Detail"], vec!["Agoda", "x=1"]])]);
    let second = cache.get_or_load(&path, "Sheet1", &config).expect("キャッシュから取得できない");

    assert_eq!(cache.loads(), 1);
    assert_eq!(second.records.len(), 4);
    assert!(std::rc::Rc::ptr_eq(&first, &second));

    // シートが変われば読み込み直す
    let reloaded = cache.get_or_load(&path, "Other", &config).expect("再読み込み失敗");
    assert_eq!(cache.loads(), 2);
    assert_eq!(reloaded.records.len(), 1);
}
