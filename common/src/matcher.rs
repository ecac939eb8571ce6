//! OTA名の照合
//!
//! 正規化したクエリが正規化した候補名の部分文字列なら一致とみなす。
//! 結果は候補の元の順序を保つ（候補側は大文字小文字を無視したアルファベット順）。

use crate::normalizer::normalize_name;
use crate::types::{OtaRecord, SearchOutcome};
use std::collections::HashSet;

/// クエリに一致する候補を返す
///
/// クエリが空（正規化後に空）なら全候補をそのまま返す。
///
/// # Examples
/// ```
/// use ota_search_common::find_matches;
///
/// let candidates = vec!["Agoda".to_string(), "Booking.com".to_string()];
/// assert_eq!(find_matches("book", &candidates), vec!["Booking.com".to_string()]);
/// assert_eq!(find_matches("", &candidates).len(), 2);
/// ```
pub fn find_matches(query: &str, candidates: &[String]) -> Vec<String> {
    let normalized_query = normalize_name(query);
    if normalized_query.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|c| normalize_name(c).contains(&normalized_query))
        .cloned()
        .collect()
}

/// 自動選択する1件（一致結果の先頭）
pub fn best_match(query: &str, candidates: &[String]) -> Option<String> {
    find_matches(query, candidates).into_iter().next()
}

/// 検索して「未入力」「一致あり」「該当なし」を区別した結果を返す
pub fn search(query: &str, candidates: &[String]) -> SearchOutcome {
    if normalize_name(query).is_empty() {
        return SearchOutcome::AwaitingQuery(candidates.to_vec());
    }

    let matches = find_matches(query, candidates);
    if matches.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Found(matches)
    }
}

/// 重複を除いたOTA名一覧（大文字小文字を無視してソート）
pub fn distinct_names(records: &[OtaRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = records
        .iter()
        .map(|r| r.name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect();

    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    names
}
