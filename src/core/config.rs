// アプリケーション設定とプラットフォーム定義

use super::error::{PatternError, PatternResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// プラットフォーム未指定時のフォールバック
pub const DEFAULT_OS: &str = "Android";

/// 対象プラットフォームを1フィールドだけ持つアプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(rename = "OS", default = "default_os")]
    pub os: String,
}

fn default_os() -> String {
    DEFAULT_OS.to_string()
}

impl ApplicationConfig {
    /// 空文字列は`DEFAULT_OS`として扱う
    pub fn new(os: impl Into<String>) -> Self {
        let os = os.into();
        if os.is_empty() {
            Self::default()
        } else {
            Self { os }
        }
    }

    /// JSON文字列から設定を読み込む
    pub fn from_json(json: &str) -> PatternResult<Self> {
        serde_json::from_str(json).map_err(PatternError::invalid_configuration)
    }

    /// 設定をJSON文字列にシリアライズ
    pub fn to_json(&self) -> PatternResult<String> {
        serde_json::to_string(self).map_err(PatternError::invalid_configuration)
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self { os: default_os() }
    }
}

/// Factory Method のUI例が起動時に読む設定
pub fn read_application_config() -> ApplicationConfig {
    ApplicationConfig::new(DesktopPlatform::Windows.as_str())
}

/// モバイルUI向けプラットフォーム（Abstract Factory の適用例）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiPlatform {
    Android,
    Ios,
}

impl UiPlatform {
    pub const ALL: [UiPlatform; 2] = [UiPlatform::Android, UiPlatform::Ios];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "IOS",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Android => "Androidスタイルのボタンとドロップダウン",
            Self::Ios => "IOSスタイルのボタンとドロップダウン",
        }
    }
}

impl FromStr for UiPlatform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| PatternError::unsupported_platform(s))
    }
}

impl fmt::Display for UiPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// デスクトップ/Web向けプラットフォーム（Factory Method の適用例）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopPlatform {
    Windows,
    Web,
}

impl DesktopPlatform {
    pub const ALL: [DesktopPlatform; 2] = [DesktopPlatform::Windows, DesktopPlatform::Web];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Web => "Web",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Windows => "ネイティブWindowsダイアログ",
            Self::Web => "HTMLボタンを使うWebダイアログ",
        }
    }
}

impl FromStr for DesktopPlatform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| PatternError::unsupported_platform(s))
    }
}

impl fmt::Display for DesktopPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
