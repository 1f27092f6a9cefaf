use crate::abstract_factory::Client;
use crate::core::{ApplicationConfig, Output, PatternResult, UiPlatform};

/// プラットフォーム指定なしの場合は Android のボタンと IOS のドロップダウンを描画する
pub fn execute_abstract_factory_example(out: &dyn Output, os: Option<&str>) -> PatternResult<()> {
    match os {
        Some(os) => launch(out, &ApplicationConfig::new(os)),
        None => {
            let config = ApplicationConfig::new(UiPlatform::Android.as_str());
            out.line(&format!("App: Launching {} Styled UI", config.os));
            let android_ui = Client::initialize(&config)?;
            android_ui.create_button().render(out);

            out.blank();

            let config = ApplicationConfig::new(UiPlatform::Ios.as_str());
            out.line(&format!("App: Launching {} Styled UI", config.os));
            let ios_ui = Client::initialize(&config)?;
            ios_ui.create_dropdown().render(out);
            Ok(())
        }
    }
}

/// 1つのプラットフォームでボタンとドロップダウンを両方描画する
fn launch(out: &dyn Output, config: &ApplicationConfig) -> PatternResult<()> {
    out.line(&format!("App: Launching {} Styled UI", config.os));
    let ui = Client::initialize(config)?;
    ui.create_button().render(out);
    ui.create_dropdown().render(out);
    Ok(())
}
