use thiserror::Error;

#[derive(Error, Debug)]
pub enum OtaSearchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ワークブックが見つかりません（候補: {0}）。`ota-search config --set-workbook PATH` で設定してください")]
    WorkbookNotFound(String),

    #[error("ワークブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("シートにデータがありません: {0}")]
    EmptySheet(String),

    #[error("一致するOTAが見つかりません: {0}")]
    NoMatch(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for OtaSearchError {
    fn from(e: calamine::Error) -> Self {
        OtaSearchError::Workbook(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for OtaSearchError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        OtaSearchError::ExcelGeneration(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OtaSearchError>;
