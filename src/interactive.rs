//! 対話式OTA検索モジュール
//!
//! OTA名を入力 → 先頭の一致を自動選択 → 明細キーを入力して値を表示。
//! 表はキャッシュから取得し、`:reload` 以外では再読み込みしない。

use crate::config::Config;
use crate::display::{render_details, render_key_values, render_outcome};
use crate::error::{OtaSearchError, Result};
use crate::workbook::TableCache;
use dialoguer::Input;
use ota_search_common::SearchOutcome;
use std::path::Path;

/// OTA名プロンプトでの操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// OTA名で検索（空なら全件表示）
    Search(String),
    /// ワークブックを読み込み直す
    Reload,
    /// 終了
    Quit,
}

/// 明細キープロンプトでの操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// キーの値を表示
    Lookup(String),
    /// 原文を表示
    ShowRaw,
    /// OTA名の入力に戻る
    Back,
    /// 終了
    Quit,
}

pub fn parse_query_action(input: &str) -> QueryAction {
    match input.trim() {
        ":q" | ":quit" => QueryAction::Quit,
        ":reload" => QueryAction::Reload,
        other => QueryAction::Search(other.to_string()),
    }
}

pub fn parse_key_action(input: &str) -> KeyAction {
    match input.trim() {
        "" => KeyAction::Back,
        ":q" | ":quit" => KeyAction::Quit,
        ":raw" => KeyAction::ShowRaw,
        other => KeyAction::Lookup(other.to_string()),
    }
}

fn prompt(text: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| OtaSearchError::Prompt(e.to_string()))
}

/// 対話式で検索
pub fn run_interactive(
    cache: &mut TableCache,
    workbook: &Path,
    sheet: &str,
    config: &Config,
) -> Result<()> {
    let mut table = cache.get_or_load(workbook, sheet, config)?;
    println!(
        "📒 {} [{}] : {}件のOTA",
        table.source.display(),
        table.sheet,
        table.names().len()
    );
    println!("操作: OTA名を入力 / 空Enterで一覧 / :reload 再読み込み / :q 終了\n");

    loop {
        let query = match parse_query_action(&prompt("OTA名")?) {
            QueryAction::Quit => break,
            QueryAction::Reload => {
                cache.clear();
                table = cache.get_or_load(workbook, sheet, config)?;
                println!("✔ 再読み込みしました ({}行)\n", table.records.len());
                continue;
            }
            QueryAction::Search(query) => query,
        };

        let outcome = table.search(&query);
        print!("{}", render_outcome(&outcome));

        // 未入力（一覧表示）と該当なしでは選択しない
        let selected = match (&outcome, outcome.selected()) {
            (SearchOutcome::Found(_), Some(name)) => name.to_string(),
            _ => {
                println!();
                continue;
            }
        };

        println!("→ {}\n", selected);
        let details = table.details(&selected);
        print!("{}", render_details(&details, None, false));

        loop {
            match parse_key_action(&prompt("明細キー (空Enterで戻る, :raw 原文)")?) {
                KeyAction::Back => {
                    println!();
                    break;
                }
                KeyAction::Quit => return Ok(()),
                KeyAction::ShowRaw => print!("{}", render_details(&details, None, true)),
                KeyAction::Lookup(key) => println!("  {}", render_key_values(&details, &key)),
            }
        }
    }

    Ok(())
}
