// 診断ログの初期化
//
// 例のトレースは標準出力に出すので、診断ログは標準エラーに書く。

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// グローバルなtracingサブスクライバーを設定する
///
/// 既に設定済みの場合は何もしない。
pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracingサブスクライバーは既に設定されています");
    }
}
