//! 選択したOTAの明細参照
//!
//! 同名の行をすべて集め、明細セルごとにキー/値を抽出する。

use crate::extractor::extract_key_values;
use crate::types::{OtaDetails, OtaRecord, RowDetails};

/// 選択したOTA名の行を抽出（前後空白・大文字小文字を無視した完全一致）
pub fn rows_for<'a>(records: &'a [OtaRecord], name: &str) -> Vec<&'a OtaRecord> {
    let target = name.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.name.trim().to_lowercase() == target)
        .collect()
}

/// 選択したOTAの明細を解析する
pub fn collect_details(records: &[OtaRecord], name: &str) -> OtaDetails {
    let mut rows = Vec::new();
    let mut detected_keys: Vec<String> = Vec::new();

    for record in rows_for(records, name) {
        for annotation in &record.annotations {
            let fields = extract_key_values(&annotation.text);
            for key in fields.keys() {
                if !detected_keys.iter().any(|k| k == key) {
                    detected_keys.push(key.to_string());
                }
            }
            rows.push(RowDetails {
                row_index: record.row_index,
                column: annotation.column.clone(),
                raw_text: annotation.text.clone(),
                fields,
            });
        }
    }

    OtaDetails {
        ota: name.trim().to_string(),
        rows,
        detected_keys,
    }
}

/// 指定キーの値を全行から集める（重複除去、初出順）
///
/// 表示時は `", "` で連結する。
pub fn values_for_key(details: &OtaDetails, key: &str) -> Vec<String> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Vec::new();
    }

    let mut values: Vec<String> = Vec::new();
    for row in &details.rows {
        if let Some(value) = row.fields.get(&key) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values
}
