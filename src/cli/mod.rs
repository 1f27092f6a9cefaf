// CLI層 - コマンドライン引数の定義と各例の実行
// ユーザーインターフェースとパターン実装の橋渡し

pub mod args;
pub mod commands;
pub mod logging;
pub mod report;

// 公開API
pub use args::*;
pub use commands::*;
pub use logging::setup_logging;
pub use report::format_failure;
