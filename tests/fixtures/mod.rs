// 統合テスト用の期待トレース

pub const ABSTRACT_FACTORY_GENERIC_TRACE: &[&str] = &[
    "App: Launched with Concrete_Model1_Factory",
    "Client - implementing core function of product_b: Result of Family B model 1 product's core function.",
    "Client - implementing other core function of product_b:  Result of other Core Function of Family B model 1 product - \n\treturning result of compatible product: Result of Family A model 1 product's core function.",
    "",
    "App: Launched with Concrete_Model2_Factory",
    "Client - implementing core function of product_b: Result of Family B model 2 product's core function.",
    "Client - implementing other core function of product_b:  Result of other Core Function of Family B model 2 product - \n\treturning result of compatible product: Result of Family A model 2 product's core function.",
];

pub const ABSTRACT_FACTORY_EXAMPLE_TRACE: &[&str] = &[
    "App: Launching Android Styled UI",
    "Rendering Android styled button",
    "",
    "App: Launching IOS Styled UI",
    "Rendering IOS styled dropdown list",
];

pub const FACTORY_METHOD_GENERIC_TRACE: &[&str] = &[
    "App: Launched with ConcreteFactory1",
    "Client: implementing Factory - Performing core factory functions using Result of concrete product 1 operation",
    "",
    "App: Launched with ConcreteFactory2",
    "Client: implementing Factory - Performing core factory functions using Result of concrete product 2 operation",
];

pub const FACTORY_METHOD_EXAMPLE_TRACE: &[&str] = &[
    "",
    "Rendering: WindowsDialogBox",
    "Creating: WindowsButton",
    "Rendering WindowsButton",
    "WindowsButton Clicked",
    "Closing: WindowsDialogBox",
];

/// 期待トレースを標準出力の形式（改行区切り）に変換
#[allow(dead_code)]
pub fn as_stdout(trace: &[&str]) -> String {
    let mut text = trace.join("\n");
    text.push('\n');
    text
}
