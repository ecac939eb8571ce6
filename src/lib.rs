//! OTA連携メモ検索ツール
//!
//! Excelに記録されたOTAごとの連携メモを読み込み、OTA名で検索して
//! 明細列のキー/値を抽出する。解析ロジック本体は `ota-search-common`。

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod interactive;
pub mod logging;
pub mod workbook;
