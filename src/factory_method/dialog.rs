//! Factory Method のクロスプラットフォームUI適用例
//!
//! ダイアログの描画手順は [`render`] で固定されており、
//! 具象ダイアログが決めるのは閉じるボタンの生成だけ。

use crate::core::{
    read_application_config, ApplicationConfig, DesktopPlatform, Output, PatternResult,
};
use tracing::debug;

/// 製品: ダイアログの閉じるボタン
pub trait DialogButton {
    fn type_name(&self) -> &'static str;

    fn render(&self, out: &dyn Output) {
        out.line(&format!("Rendering {}", self.type_name()));
    }

    /// クリックを通知し、渡されたハンドラをその場で1回だけ実行する
    fn on_click(&self, out: &dyn Output, handler: &dyn Fn()) {
        out.line(&format!("{} Clicked", self.type_name()));
        handler();
    }
}

/// ファクトリー: ボタンの生成をサブタイプに任せるダイアログ
pub trait DialogBox {
    fn type_name(&self) -> &'static str;

    /// ボタンを生成する（ダイアログ本来の責務ではない）
    fn create_button(&self, out: &dyn Output) -> Box<dyn DialogButton>;
}

/// ダイアログの描画手順
///
/// 告知 → ボタン生成 → ボタン描画 → クリックハンドラ実行 → ダイアログを閉じる
pub fn render<D: DialogBox + ?Sized>(dialog: &D, out: &dyn Output) {
    out.line(&format!("Rendering: {}", dialog.type_name()));
    let exit_button = dialog.create_button(out);
    exit_button.render(out);
    exit_button.on_click(out, &|| close_dialog(dialog, out));
}

pub fn close_dialog<D: DialogBox + ?Sized>(dialog: &D, out: &dyn Output) {
    out.line(&format!("Closing: {}", dialog.type_name()));
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsButton;

impl DialogButton for WindowsButton {
    fn type_name(&self) -> &'static str {
        "WindowsButton"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlButton;

impl DialogButton for HtmlButton {
    fn type_name(&self) -> &'static str {
        "HTMLButton"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsDialogBox;

impl DialogBox for WindowsDialogBox {
    fn type_name(&self) -> &'static str {
        "WindowsDialogBox"
    }

    fn create_button(&self, out: &dyn Output) -> Box<dyn DialogButton> {
        out.line("Creating: WindowsButton");
        Box::new(WindowsButton)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebDialogBox;

impl DialogBox for WebDialogBox {
    fn type_name(&self) -> &'static str {
        "WebDialogBox"
    }

    fn create_button(&self, out: &dyn Output) -> Box<dyn DialogButton> {
        out.line("Creating: HTMLButton");
        Box::new(HtmlButton)
    }
}

/// 設定からダイアログを選択するクライアント
pub struct Client;

impl Client {
    /// アプリケーション設定を読み込んでダイアログを返す
    pub fn initialize() -> PatternResult<Box<dyn DialogBox>> {
        Self::initialize_with(&read_application_config())
    }

    pub fn initialize_with(config: &ApplicationConfig) -> PatternResult<Box<dyn DialogBox>> {
        let platform: DesktopPlatform = config.os.parse()?;
        debug!(%platform, "ダイアログを選択");
        Ok(Self::dialog_for(platform))
    }

    pub fn dialog_for(platform: DesktopPlatform) -> Box<dyn DialogBox> {
        match platform {
            DesktopPlatform::Windows => Box::new(WindowsDialogBox),
            DesktopPlatform::Web => Box::new(WebDialogBox),
        }
    }
}
