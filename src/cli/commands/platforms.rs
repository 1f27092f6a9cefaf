use crate::abstract_factory::Model;
use crate::core::{DesktopPlatform, Output, UiPlatform};

/// 各例で選択できるプラットフォーム/モデルの一覧を出力する
pub fn execute_platforms(out: &dyn Output) {
    out.line("abstract-factory-example:");
    for platform in UiPlatform::ALL {
        out.line(&format!("  {platform:<8} {}", platform.description()));
    }

    out.line("factory-method-example:");
    for platform in DesktopPlatform::ALL {
        out.line(&format!("  {platform:<8} {}", platform.description()));
    }

    out.line("abstract-factory-generic:");
    for model in Model::ALL {
        out.line(&format!("  {}", model.factory_name()));
    }
}
