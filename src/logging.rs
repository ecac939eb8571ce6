//! ログ初期化
//!
//! 診断ログは標準エラーへ出力する（標準出力は検索結果用）。
//! `RUST_LOG` があればそれを優先し、なければ `--verbose` で debug、通常は warn。

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重に初期化されても無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
