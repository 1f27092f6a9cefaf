use crate::abstract_factory::{client_code, Model};
use crate::core::{Output, PatternResult};

/// 各モデルのファクトリーでクライアントコードを実行する
pub fn execute_abstract_factory_generic(out: &dyn Output) -> PatternResult<()> {
    for (index, model) in Model::ALL.into_iter().enumerate() {
        if index > 0 {
            out.blank();
        }
        out.line(&format!("App: Launched with {}", model.factory_name()));
        client_code(model.factory().as_ref(), out);
    }
    Ok(())
}
