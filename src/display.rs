//! 検索結果・明細のテキスト表示

use ota_search_common::{values_for_key, OtaDetails, SearchOutcome};
use serde::Serialize;
use std::fmt::Write;

/// `search --format json` の出力
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView<'a> {
    pub query: &'a str,
    pub matches: &'a [String],
    pub selected: Option<&'a str>,
    pub details: Option<&'a OtaDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl<'a> SearchView<'a> {
    pub fn new(
        query: &'a str,
        outcome: &'a SearchOutcome,
        details: Option<&'a OtaDetails>,
        key: Option<&str>,
    ) -> Self {
        let key = key
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());
        let values = match (details, &key) {
            (Some(details), Some(key)) => values_for_key(details, key),
            _ => Vec::new(),
        };
        Self {
            query,
            matches: outcome.names(),
            selected: details.map(|d| d.ota.as_str()),
            details,
            key,
            values,
        }
    }
}

/// OTA名の検索結果を表示用に整形
///
/// 「未入力（全件）」「一致あり」「該当なし」で見出しを分ける。
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    match outcome {
        SearchOutcome::AwaitingQuery(names) => {
            let _ = writeln!(out, "OTA一覧 ({}件):", names.len());
            for name in names {
                let _ = writeln!(out, "  - {}", name);
            }
        }
        SearchOutcome::Found(names) => {
            let _ = writeln!(out, "一致したOTA ({}件):", names.len());
            for name in names {
                let _ = writeln!(out, "  - {}", name);
            }
        }
        SearchOutcome::NoResults => {
            let _ = writeln!(out, "⚠ 一致するOTAが見つかりません。別の検索語を試してください");
        }
    }
    out
}

/// 指定キーの値（複数なら ", " 区切り）
pub fn render_key_values(details: &OtaDetails, key: &str) -> String {
    let values = values_for_key(details, key);
    if values.is_empty() {
        format!("値 ({}): 見つかりません", key.trim().to_lowercase())
    } else {
        format!("値 ({}): {}", key.trim().to_lowercase(), values.join(", "))
    }
}

/// 選択したOTAの明細を表示用に整形
pub fn render_details(details: &OtaDetails, key: Option<&str>, show_raw: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "■ {} の明細", details.ota);

    if details.is_empty() {
        let _ = writeln!(out, "選択したOTAの明細行がありません");
        return out;
    }

    if details.detected_keys.is_empty() {
        let _ = writeln!(out, "明細列から構造化キーは検出されませんでした");
    } else {
        let _ = writeln!(out, "検出キー: {}", details.detected_keys.join(", "));
    }

    if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
        let _ = writeln!(out, "{}", render_key_values(details, key));
    }

    if show_raw {
        let _ = writeln!(out, "---");
        for row in &details.rows {
            let _ = writeln!(out, "[row:{}] ({}) {}", row.row_index, row.column, row.raw_text);
        }
    }

    out
}
