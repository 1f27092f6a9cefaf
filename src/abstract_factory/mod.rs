// Abstract Factory パターン
//
// - generic.rs - 抽象的な命名による汎用例（モデル1/モデル2）
// - ui.rs      - Android/IOS 向けUI部品の適用例

pub mod generic;
pub mod ui;

// 公開API
pub use generic::{client_code, AbstractFactory, Model, ProductFamilyA, ProductFamilyB};
pub use ui::{Button, Client, DropDown, UiElementFactory};
