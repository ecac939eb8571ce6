//! 読み込み済みOTA表のキャッシュ
//!
//! (ワークブックパス, シート名) をキーに1件だけ保持し、
//! 同じキーの要求ではファイルを再読み込みしない。
//! キーが変わった場合のみ読み込み直す。

use super::{load_table, OtaTable};
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// キャッシュキー
#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    path: PathBuf,
    sheet: String,
}

impl CacheKey {
    fn new(path: &Path, sheet: &str) -> Self {
        // 正規化できないパス（未作成など）はそのまま使う
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self {
            path,
            sheet: sheet.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TableCache {
    entry: Option<(CacheKey, Rc<OtaTable>)>,
    loads: usize,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// ワークブックを読み込む（キャッシュ済みならそれを返す）
    pub fn get_or_load(&mut self, path: &Path, sheet: &str, config: &Config) -> Result<Rc<OtaTable>> {
        self.get_or_load_with(path, sheet, |p, s| load_table(p, s, config))
    }

    /// 読み込み処理を指定してキャッシュを参照
    pub fn get_or_load_with<F>(&mut self, path: &Path, sheet: &str, load: F) -> Result<Rc<OtaTable>>
    where
        F: FnOnce(&Path, &str) -> Result<OtaTable>,
    {
        let key = CacheKey::new(path, sheet);

        if let Some((cached_key, table)) = &self.entry {
            if *cached_key == key {
                tracing::debug!(path = %path.display(), sheet, "キャッシュヒット");
                return Ok(Rc::clone(table));
            }
        }

        let table = Rc::new(load(path, sheet)?);
        self.loads += 1;
        self.entry = Some((key, Rc::clone(&table)));
        Ok(table)
    }

    /// 保持している表
    pub fn current(&self) -> Option<Rc<OtaTable>> {
        self.entry.as_ref().map(|(_, table)| Rc::clone(table))
    }

    /// 実際に読み込んだ回数
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
