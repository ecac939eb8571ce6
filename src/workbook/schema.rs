//! 列の解決
//!
//! 見出し行を大文字小文字・前後空白を無視して別名と照合し、
//! OTA名列と明細列の位置を読み込み時に一度だけ決める。

use crate::error::{OtaSearchError, Result};

/// 解決済みの列構成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// OTA名列（列番号, 見出し）
    pub name_column: (usize, String),
    /// 明細列（列番号, 見出し）。シート上の列順
    pub annotation_columns: Vec<(usize, String)>,
}

fn matches_alias(header: &str, aliases: &[String]) -> bool {
    let header = header.trim().to_lowercase();
    aliases.iter().any(|a| a.trim().to_lowercase() == header)
}

/// 見出し行から列構成を解決する
///
/// - OTA名列: 別名に一致する最初の列。なければ先頭列
/// - 明細列: 別名に一致するすべての列。なければ2列目（2列目が名前列なら先頭列、1列しかなければ名前列）
pub fn resolve_schema(
    headers: &[String],
    name_aliases: &[String],
    detail_aliases: &[String],
) -> Result<TableSchema> {
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(OtaSearchError::EmptySheet("見出し行が空です".into()));
    }

    let name_idx = headers
        .iter()
        .position(|h| matches_alias(h, name_aliases))
        .unwrap_or(0);

    let mut annotation_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != name_idx && matches_alias(h, detail_aliases))
        .map(|(i, h)| (i, h.trim().to_string()))
        .collect();

    if annotation_columns.is_empty() {
        let fallback = if headers.len() >= 2 {
            if name_idx != 1 { 1 } else { 0 }
        } else {
            name_idx
        };
        tracing::debug!(column = fallback, "明細列の見出しが見つからないため位置で決定");
        annotation_columns.push((fallback, headers[fallback].trim().to_string()));
    }

    Ok(TableSchema {
        name_column: (name_idx, headers[name_idx].trim().to_string()),
        annotation_columns,
    })
}
