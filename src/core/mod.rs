// コアレイヤー - 設定、出力先、エラー定義
// 各パターンのモジュールから参照される基本的な抽象化を提供

pub mod config;
pub mod error;
pub mod output;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use config::{read_application_config, ApplicationConfig, DesktopPlatform, UiPlatform};
pub use error::{PatternError, PatternResult};
pub use output::{ConsoleOutput, NoOpOutput, Output, RecordingOutput};
