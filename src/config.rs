use crate::error::{OtaSearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ワークブックの候補パス（先に存在したものを使用）
    pub workbook_paths: Vec<PathBuf>,
    /// 優先するシート名（なければ先頭シート）
    pub sheet_name: String,
    /// OTA名列として認識する見出し（小文字）
    pub name_aliases: Vec<String>,
    /// 明細列として認識する見出し（小文字）
    pub detail_aliases: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_paths: vec![PathBuf::from("XY.xlsx"), PathBuf::from("data/XY.xlsx")],
            sheet_name: "Sheet1".into(),
            name_aliases: vec!["otaname".into(), "ota name".into(), "ota".into()],
            detail_aliases: vec![
                "detail".into(),
                "details".into(),
                "setup details".into(),
                "ari behaviour".into(),
                "ari behavior".into(),
            ],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定ファイルを読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OtaSearchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ota-search").join("config.json"))
    }

    /// ワークブックパスを設定（候補の先頭に追加）
    pub fn set_workbook(&mut self, path: PathBuf) -> Result<()> {
        self.workbook_paths.retain(|p| p != &path);
        self.workbook_paths.insert(0, path);
        self.save()
    }

    pub fn set_sheet(&mut self, sheet: String) -> Result<()> {
        self.sheet_name = sheet;
        self.save()
    }
}
