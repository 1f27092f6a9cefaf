// Factory Method パターン
//
// - generic.rs - 抽象的な命名による汎用例
// - dialog.rs  - Windows/Web 向けダイアログの適用例

pub mod dialog;
pub mod generic;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use dialog::{close_dialog, render, DialogBox, DialogButton};
pub use generic::{factory_function, Factory, FnFactory, Product};
