//! OTA検索の型定義
//!
//! CLIと対話モードで共有される型:
//! - OtaRecord: シートの1行（OTA名 + 明細列）
//! - ExtractedFields: 明細テキストから抽出したキー/値（出現順）
//! - RowDetails / OtaDetails: 選択したOTAの明細解析結果
//! - SearchOutcome: OTA名検索の結果

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// 明細セル（列名 + テキスト）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub column: String,
    pub text: String,
}

impl Annotation {
    pub fn new(column: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            text: text.into(),
        }
    }
}

/// シートの1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtaRecord {
    /// データ行番号（ヘッダー行を除いた0始まり）
    pub row_index: usize,

    /// OTA名（前後空白除去済み）
    pub name: String,

    /// 明細列（シート上の列順）
    pub annotations: Vec<Annotation>,
}

/// 明細テキストから抽出したキー/値
///
/// キーは小文字。挿入順を保持し、同じキーの上書きでも位置は変わらない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedFields {
    entries: IndexMap<String, String>,
}

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 値を設定（既存キーは値のみ上書き）
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    /// 未登録のキーのみ追加。追加した場合は true
    pub fn insert_if_absent(&mut self, key: String, value: String) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 明細セル1つ分の解析結果
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDetails {
    pub row_index: usize,
    pub column: String,
    pub raw_text: String,
    pub fields: ExtractedFields,
}

/// 選択したOTAの明細解析結果
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtaDetails {
    /// 選択したOTA名
    pub ota: String,
    pub rows: Vec<RowDetails>,
    /// 全行で検出したキー（初出順）
    pub detected_keys: Vec<String>,
}

impl OtaDetails {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// OTA名検索の結果
///
/// 「未入力」と「該当なし」を区別する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// クエリ未入力: 全候補
    AwaitingQuery(Vec<String>),
    /// 一致した候補（元の順序）
    Found(Vec<String>),
    /// 該当なし
    NoResults,
}

impl SearchOutcome {
    pub fn names(&self) -> &[String] {
        match self {
            SearchOutcome::AwaitingQuery(names) | SearchOutcome::Found(names) => names.as_slice(),
            SearchOutcome::NoResults => &[],
        }
    }

    /// 自動選択される候補（先頭）
    pub fn selected(&self) -> Option<&str> {
        self.names().first().map(String::as_str)
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, SearchOutcome::NoResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut fields = ExtractedFields::new();
        fields.insert("channelid".into(), "1".into());
        fields.insert("available".into(), "5".into());
        fields.insert("channelid".into(), "2".into());

        assert_eq!(fields.get("channelid"), Some("2"));
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["channelid", "available"]);
    }

    #[test]
    fn test_insert_if_absent() {
        let mut fields = ExtractedFields::new();
        assert!(fields.insert_if_absent("note".into(), "first".into()));
        assert!(!fields.insert_if_absent("note".into(), "second".into()));
        assert_eq!(fields.get("note"), Some("first"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_fields_serialize_in_order() {
        let mut fields = ExtractedFields::new();
        fields.insert("zeta".into(), "1".into());
        fields.insert("alpha".into(), "2".into());
        fields.insert("zeta".into(), "3".into());
        fields.insert_if_absent("alpha".into(), "4".into());

        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"zeta":"3","alpha":"2"}"#);
    }

    #[test]
    fn test_search_outcome_selected() {
        let found = SearchOutcome::Found(vec!["Agoda".into(), "Booking.com".into()]);
        assert_eq!(found.selected(), Some("Agoda"));

        assert_eq!(SearchOutcome::NoResults.selected(), None);
        assert!(SearchOutcome::NoResults.names().is_empty());
        assert!(SearchOutcome::NoResults.is_no_results());
    }

    #[test]
    fn test_details_to_json() {
        let details = OtaDetails {
            ota: "Booking.com".into(),
            rows: vec![],
            detected_keys: vec!["channelid".into()],
        };
        let json = serde_json::to_string_pretty(&details).unwrap();
        assert!(json.contains("\"ota\": \"Booking.com\""));
        assert!(json.contains("detectedKeys"));
    }
}
