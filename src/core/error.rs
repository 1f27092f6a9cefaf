// パターン例で使用するカスタムエラー型定義

use thiserror::Error;

/// 生成パターン固有のエラー型
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("未サポートのプラットフォーム: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("設定エラー: {source}")]
    InvalidConfiguration {
        #[source]
        source: serde_json::Error,
    },
}

impl PatternError {
    /// 未サポートプラットフォームエラーの作成
    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.into(),
        }
    }

    /// 設定エラーの作成
    pub fn invalid_configuration(source: serde_json::Error) -> Self {
        Self::InvalidConfiguration { source }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::UnsupportedPlatform { platform } => ErrorContext::new("client_selection")
                .with_resource(platform.clone())
                .with_suggestion("サポートされているプラットフォームを指定してください"),
            Self::InvalidConfiguration { .. } => ErrorContext::new("configuration")
                .with_suggestion("設定JSONの形式を確認してください"),
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（プラットフォーム名等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    /// リソース情報を追加
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// 提案を追加
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// パターン例の結果型
pub type PatternResult<T> = std::result::Result<T, PatternError>;
