use crate::core::{read_application_config, ApplicationConfig, Output, PatternResult};
use crate::factory_method::dialog::{render, Client};

/// 設定に応じたダイアログを描画する
///
/// プラットフォーム指定がなければ `read_application_config` の値を使う。
/// トレースは空行から始まる。
pub fn execute_factory_method_example(out: &dyn Output, os: Option<&str>) -> PatternResult<()> {
    let config = os
        .map(ApplicationConfig::new)
        .unwrap_or_else(read_application_config);
    let dialog = Client::initialize_with(&config)?;
    out.blank();
    render(dialog.as_ref(), out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PatternError, RecordingOutput};

    #[test]
    fn test_default_trace_is_windows() {
        let output = RecordingOutput::new();
        execute_factory_method_example(&output, None).unwrap();

        let lines = output.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(lines[2], "Creating: WindowsButton");
    }

    #[test]
    fn test_web_trace() {
        let output = RecordingOutput::new();
        execute_factory_method_example(&output, Some("Web")).unwrap();

        assert_eq!(output.lines()[1], "Rendering: WebDialogBox");
        assert_eq!(output.lines()[5], "Closing: WebDialogBox");
    }

    #[test]
    fn test_unsupported_platform() {
        let output = RecordingOutput::new();
        let result = execute_factory_method_example(&output, Some("Linux"));

        assert!(matches!(result, Err(PatternError::UnsupportedPlatform { .. })));
        assert!(output.lines().is_empty());
    }
}
