//! ワークブック読み込みモジュール
//!
//! ## 処理フロー
//! 1. 候補パスからワークブックを決定
//! 2. シート選択（指定シートがなければ先頭シート）
//! 3. 見出し行から列を解決し、OTA名が空でない行をレコード化

pub mod cache;
pub mod schema;

pub use cache::TableCache;
pub use schema::{resolve_schema, TableSchema};

use crate::config::Config;
use crate::error::{OtaSearchError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use ota_search_common::{
    best_match, collect_details, distinct_names, search, Annotation, OtaDetails, OtaRecord, SearchOutcome,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// 読み込み済みのOTA表（読み取り専用）
#[derive(Debug, Clone)]
pub struct OtaTable {
    pub source: PathBuf,
    pub sheet: String,
    pub schema: TableSchema,
    pub records: Vec<OtaRecord>,
}

impl OtaTable {
    /// 見出し行 + データ行から表を構築
    pub fn from_rows(
        source: &Path,
        sheet: &str,
        mut rows: Vec<Vec<String>>,
        config: &Config,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(OtaSearchError::EmptySheet(sheet.to_string()));
        }
        let headers = rows.remove(0);
        let schema = resolve_schema(&headers, &config.name_aliases, &config.detail_aliases)?;

        let cell = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

        let records: Vec<OtaRecord> = rows
            .iter()
            .enumerate()
            .filter_map(|(row_index, row)| {
                let name = cell(row, schema.name_column.0).trim().to_string();
                if name.is_empty() {
                    return None;
                }
                let annotations = schema
                    .annotation_columns
                    .iter()
                    .map(|(idx, header)| Annotation::new(header.clone(), cell(row, *idx)))
                    .collect();
                Some(OtaRecord {
                    row_index,
                    name,
                    annotations,
                })
            })
            .collect();

        if records.is_empty() {
            return Err(OtaSearchError::EmptySheet(sheet.to_string()));
        }

        Ok(Self {
            source: source.to_path_buf(),
            sheet: sheet.to_string(),
            schema,
            records,
        })
    }

    /// 重複を除いたOTA名一覧
    pub fn names(&self) -> Vec<String> {
        distinct_names(&self.records)
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        search(query, &self.names())
    }

    /// 自動選択するOTA名（一致結果の先頭）
    pub fn best_match(&self, query: &str) -> Option<String> {
        best_match(query, &self.names())
    }

    pub fn details(&self, name: &str) -> OtaDetails {
        collect_details(&self.records, name)
    }
}

/// 使用するワークブックを決定
///
/// 候補パスのうち最初に存在するもの。なければ `search_dir` 直下の
/// ワークブック（ファイル名順の先頭）。
pub fn locate_workbook(candidates: &[PathBuf], search_dir: &Path) -> Result<PathBuf> {
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    let mut discovered: Vec<PathBuf> = WalkDir::new(search_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_workbook(p))
        .collect();
    discovered.sort();

    match discovered.into_iter().next() {
        Some(path) => {
            tracing::info!(path = %path.display(), "候補パスにないためフォルダ内のワークブックを使用");
            Ok(path)
        }
        None => {
            let names: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
            Err(OtaSearchError::WorkbookNotFound(names.join(", ")))
        }
    }
}

/// 明示指定があればそれを、なければ設定の候補パスから決定
pub fn resolve_workbook(explicit: Option<&Path>, config: &Config, search_dir: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => Err(OtaSearchError::FileNotFound(path.display().to_string())),
        None => locate_workbook(&config.workbook_paths, search_dir),
    }
}

fn is_workbook(path: &Path) -> bool {
    // Excelのロックファイル（~$xxx.xlsx）は除外
    let is_lock_file = path
        .file_name()
        .map(|n| n.to_string_lossy().starts_with("~$"))
        .unwrap_or(false);
    if is_lock_file {
        return false;
    }

    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            WORKBOOK_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// シートを選択（指定シートがあればそれ、なければ先頭）
pub fn choose_sheet(sheet_names: &[String], preferred: &str) -> Result<String> {
    if let Some(sheet) = sheet_names.iter().find(|s| s.as_str() == preferred) {
        return Ok(sheet.clone());
    }

    match sheet_names.first() {
        Some(first) => {
            tracing::debug!(preferred, fallback = %first, "指定シートがないため先頭シートを使用");
            Ok(first.clone())
        }
        None => Err(OtaSearchError::SheetNotFound(preferred.to_string())),
    }
}

/// セル値を文字列化（空セル・エラーセルは空文字）
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| cell.to_string()),
        // 整数値の数値セルは小数部なしで表示される
        other => other.to_string(),
    }
}

/// ワークブックを読み込んでOTA表を構築
pub fn load_table(path: &Path, preferred_sheet: &str, config: &Config) -> Result<OtaTable> {
    if !path.exists() {
        return Err(OtaSearchError::FileNotFound(path.display().to_string()));
    }

    let started = Instant::now();
    let mut workbook = open_workbook_auto(path)?;
    let sheet = choose_sheet(&workbook.sheet_names(), preferred_sheet)?;
    let range = workbook.worksheet_range(&sheet)?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    let table = OtaTable::from_rows(path, &sheet, rows, config)?;

    tracing::info!(
        path = %path.display(),
        sheet = %table.sheet,
        records = table.records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ワークブックを読み込みました"
    );
    tracing::debug!(schema = ?table.schema, "列構成");

    Ok(table)
}
