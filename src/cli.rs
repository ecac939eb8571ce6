use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ota-search")]
#[command(about = "OTA連携メモ（Excel）の検索・明細キー抽出ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ワークブックのパス（省略時は設定の候補パス）
    #[arg(long, global = true)]
    pub workbook: Option<PathBuf>,

    /// シート名（省略時は設定値、なければ先頭シート）
    #[arg(long, global = true)]
    pub sheet: Option<String>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// OTA名の一覧を表示（検索語で絞り込み）
    List {
        /// 検索語（OTA名の一部、"booking dot com" 等の読み上げ表記も可）
        query: Option<String>,
    },

    /// OTAを検索して明細を表示
    Search {
        /// 検索語（先頭の一致を自動選択）
        #[arg(required = true)]
        query: String,

        /// 値を表示する明細キー（例: channelid）
        #[arg(short, long)]
        key: Option<String>,

        /// 明細の原文を行番号付きで表示
        #[arg(long)]
        raw: bool,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// テキストからキー/値を抽出して表示
    Extract {
        /// 明細テキスト
        #[arg(required = true)]
        text: String,
    },

    /// 対話式で検索
    Interactive,

    /// 選択したOTAの明細をExcel/JSONに出力
    Export {
        /// 検索語（先頭の一致を自動選択）
        #[arg(required = true)]
        query: String,

        /// 出力ファイル/ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (excel/json)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,
    },

    /// 設定を表示/編集
    Config {
        /// ワークブックのパスを設定
        #[arg(long)]
        set_workbook: Option<PathBuf>,

        /// シート名を設定
        #[arg(long)]
        set_sheet: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 標準出力の形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}
