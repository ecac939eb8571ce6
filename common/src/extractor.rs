//! 明細テキストのキー/値抽出
//!
//! 明細列には `channelid=123; available=10` のような等号形式と、
//! `Note: 値` のようなコロン形式が混在する。
//!
//! ## 抽出順序
//! 1. 等号形式（同じキーは後勝ち）
//! 2. コロン形式（未登録のキーのみ追加）
//!
//! 等号形式で得たキーはコロン形式で上書きされない。

use crate::types::ExtractedFields;
use regex::Regex;

lazy_static::lazy_static! {
    // key=value（値は ; , 改行 まで）
    static ref EQUALS_RE: Regex = Regex::new(r"([A-Za-z0-9_\-]+)\s*=\s*([^;,\n\r]+)").unwrap();
    // Key: value（キーは空白を含む最短一致、値は ; , 改行 まで）
    static ref COLON_RE: Regex = Regex::new(r"([A-Za-z0-9_\- ]+?)\s*:\s*([^;,\n\r]+)").unwrap();
}

/// 明細テキストからキー/値を抽出する
///
/// 区切りのないテキストや空文字は空の結果になる。失敗することはない。
///
/// # Examples
/// ```
/// use ota_search_common::extract_key_values;
///
/// let fields = extract_key_values("channelid=123; available=10");
/// assert_eq!(fields.get("channelid"), Some("123"));
/// assert_eq!(fields.get("available"), Some("10"));
/// ```
pub fn extract_key_values(text: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::new();
    if text.is_empty() {
        return fields;
    }

    for caps in EQUALS_RE.captures_iter(text) {
        let key = caps[1].trim().to_lowercase();
        let value = caps[2].trim().to_string();
        fields.insert(key, value);
    }

    for caps in COLON_RE.captures_iter(text) {
        let key = caps[1].trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let value = caps[2].trim().to_string();
        fields.insert_if_absent(key, value);
    }

    fields
}
