// テスト用のダイアログ/ボタンモック実装

use super::dialog::{DialogBox, DialogButton};
use crate::core::Output;
use std::sync::{Arc, Mutex};

/// 呼び出されたステップを記録するボタン
pub struct MockDialogButton {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl DialogButton for MockDialogButton {
    fn type_name(&self) -> &'static str {
        "MockButton"
    }

    fn render(&self, _out: &dyn Output) {
        self.events.lock().unwrap().push("render_button".to_string());
    }

    fn on_click(&self, _out: &dyn Output, handler: &dyn Fn()) {
        self.events.lock().unwrap().push("click".to_string());
        handler();
    }
}

/// 生成ステップだけを差し替えたダイアログ
pub struct MockDialogBox {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockDialogBox {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl DialogBox for MockDialogBox {
    fn type_name(&self) -> &'static str {
        "MockDialogBox"
    }

    fn create_button(&self, _out: &dyn Output) -> Box<dyn DialogButton> {
        self.events.lock().unwrap().push("create_button".to_string());
        Box::new(MockDialogButton {
            events: Arc::clone(&self.events),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DesktopPlatform, RecordingOutput};
    use crate::factory_method::dialog::{render, Client};

    #[test]
    fn test_render_order_with_custom_creator() {
        let dialog = MockDialogBox::new();
        let output = RecordingOutput::new();

        render(&dialog, &output);

        assert_eq!(
            *dialog.events.lock().unwrap(),
            vec!["create_button", "render_button", "click"]
        );
        // 告知とクローズはダイアログ側の固定処理が出力する
        assert_eq!(
            output.lines(),
            vec!["Rendering: MockDialogBox", "Closing: MockDialogBox"]
        );
    }

    #[test]
    fn test_render_order_is_same_for_every_platform() {
        for platform in DesktopPlatform::ALL {
            let output = RecordingOutput::new();
            let dialog = Client::dialog_for(platform);
            render(dialog.as_ref(), &output);

            let lines = output.lines();
            let position = |prefix: &str| {
                lines
                    .iter()
                    .position(|line| line.starts_with(prefix))
                    .unwrap_or_else(|| panic!("{prefix} が出力されていません"))
            };

            let created = position("Creating: ");
            let rendered = lines
                .iter()
                .position(|line| line.starts_with("Rendering ") && !line.starts_with("Rendering:"))
                .unwrap();
            let clicked = lines.iter().position(|line| line.ends_with(" Clicked")).unwrap();
            let closed = position("Closing: ");

            assert_eq!(position("Rendering: "), 0);
            assert!(created < rendered);
            assert!(rendered < clicked);
            assert!(clicked < closed);
        }
    }
}
