pub mod excel;
pub mod json;

use crate::error::Result;
use crate::workbook::OtaTable;
use ota_search_common::OtaDetails;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use excel or json", s)),
        }
    }
}

/// 選択したOTAの明細レポート
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtaReport {
    pub ota: String,
    pub generated_at: String,
    pub workbook: String,
    pub sheet: String,
    pub details: OtaDetails,
}

impl OtaReport {
    pub fn new(table: &OtaTable, details: OtaDetails) -> Self {
        Self {
            ota: details.ota.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            workbook: table.source.display().to_string(),
            sheet: table.sheet.clone(),
            details,
        }
    }
}

/// 出力先がフォルダ（または拡張子なし）なら OTA名.拡張子 を付ける
///
/// ファイル指定の拡張子は出力形式に合わせる。
pub fn output_path_for_format(output: &Path, ota: &str, format: ExportFormat) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", file_stem_for(ota), format.extension()))
    } else {
        output.with_extension(format.extension())
    }
}

/// ファイル名に使えない文字を置換
fn file_stem_for(ota: &str) -> String {
    let stem: String = ota
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() { "ota".to_string() } else { stem }
}

pub fn export_report(report: &OtaReport, format: ExportFormat, output: &Path) -> Result<PathBuf> {
    let output_path = output_path_for_format(output, &report.ota, format);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match format {
        ExportFormat::Excel => {
            println!("- Excelを生成中...");
            excel::generate_excel(report, &output_path)?;
            println!("✔ Excel出力: {}", output_path.display());
        }
        ExportFormat::Json => {
            json::write_json(report, &output_path)?;
            println!("✔ JSON出力: {}", output_path.display());
        }
    }

    Ok(output_path)
}
