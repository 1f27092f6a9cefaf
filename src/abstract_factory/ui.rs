//! Abstract Factory のクロスプラットフォームUI適用例

use crate::core::{ApplicationConfig, Output, PatternResult, UiPlatform};
use tracing::debug;

/// UI部品の抽象ファクトリー
pub trait UiElementFactory {
    fn platform(&self) -> UiPlatform;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_dropdown(&self) -> Box<dyn DropDown>;
}

/// 抽象製品: ボタン
pub trait Button {
    fn render(&self, out: &dyn Output);
}

/// 抽象製品: ドロップダウンリスト
pub trait DropDown {
    fn render(&self, out: &dyn Output);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidFactory;

impl UiElementFactory for AndroidFactory {
    fn platform(&self) -> UiPlatform {
        UiPlatform::Android
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(AndroidButton)
    }

    fn create_dropdown(&self) -> Box<dyn DropDown> {
        Box::new(AndroidDropDown)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IosFactory;

impl UiElementFactory for IosFactory {
    fn platform(&self) -> UiPlatform {
        UiPlatform::Ios
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(IosButton)
    }

    fn create_dropdown(&self) -> Box<dyn DropDown> {
        Box::new(IosDropDown)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidButton;

impl Button for AndroidButton {
    fn render(&self, out: &dyn Output) {
        out.line("Rendering Android styled button");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidDropDown;

impl DropDown for AndroidDropDown {
    fn render(&self, out: &dyn Output) {
        out.line("Rendering Android styled dropdown list");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IosButton;

impl Button for IosButton {
    fn render(&self, out: &dyn Output) {
        out.line("Rendering IOS styled Button");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IosDropDown;

impl DropDown for IosDropDown {
    fn render(&self, out: &dyn Output) {
        out.line("Rendering IOS styled dropdown list");
    }
}

/// 設定からUIファクトリーを選択するクライアント
pub struct Client;

impl Client {
    /// 設定のプラットフォーム名を解釈してファクトリーを返す
    pub fn initialize(config: &ApplicationConfig) -> PatternResult<Box<dyn UiElementFactory>> {
        let platform: UiPlatform = config.os.parse()?;
        debug!(%platform, "UIファクトリーを選択");
        Ok(Self::factory_for(platform))
    }

    pub fn factory_for(platform: UiPlatform) -> Box<dyn UiElementFactory> {
        match platform {
            UiPlatform::Android => Box::new(AndroidFactory),
            UiPlatform::Ios => Box::new(IosFactory),
        }
    }
}
