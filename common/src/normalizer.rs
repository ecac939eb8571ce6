//! OTA名の正規化（比較用）
//!
//! 音声入力や手入力で揺れるドメイン表記を統一する。
//! 例: `Booking Dot Com` / `booking con` → `booking.com`
//!
//! クエリと候補の両方に同じ正規化を適用してから部分一致で比較する。

/// 置換ルール（順序に意味がある。後のルールは前のルールの結果に適用）
const SPOKEN_FORM_RULES: &[(&str, &str)] = &[
    (" dot ", "."),
    (" dotcom", ".com"),
    (" dot com", ".com"),
    // "com" の誤認識
    (" con", ".com"),
    (" coma", ".com"),
];

/// OTA名を正規化形式に変換
///
/// - 大文字→小文字、前後空白除去
/// - 読み上げ表記の置換（" dot " → "." など）
/// - 残った空白をすべて除去
///
/// 冪等: `normalize_name(&normalize_name(x)) == normalize_name(x)`
///
/// # Examples
/// ```
/// use ota_search_common::normalize_name;
///
/// assert_eq!(normalize_name("Booking Dot Com"), "booking.com");
/// assert_eq!(normalize_name("booking con"), "booking.com");
/// ```
pub fn normalize_name(text: &str) -> String {
    let mut result = text.to_lowercase().trim().to_string();

    for (from, to) in SPOKEN_FORM_RULES {
        result = result.replace(from, to);
    }

    result.chars().filter(|c| !c.is_whitespace()).collect()
}
