//! Factory Method の汎用例
//!
//! 生成処理だけを差し替え可能にし、製品を使う処理の流れは固定する。

use crate::core::Output;
use mockall::automock;
use tracing::debug;

/// 具象製品が実装する操作
#[automock]
pub trait Product {
    fn operation(&self) -> String;
}

/// 製品を生成するファクトリー
#[automock]
pub trait Factory {
    /// 製品を生成する（差し替え可能なステップ）
    fn factory_method(&self) -> Box<dyn Product>;
}

/// クロージャを生成ステップとして使うファクトリー
pub struct FnFactory<F>(pub F);

impl<F> Factory for FnFactory<F>
where
    F: Fn() -> Box<dyn Product>,
{
    fn factory_method(&self) -> Box<dyn Product> {
        (self.0)()
    }
}

/// ファクトリーのコア処理
///
/// 生成ステップ以外はどのファクトリーでも同じ流れになる。
pub fn factory_function<F: Factory + ?Sized>(factory: &F) -> String {
    let product = factory.factory_method();
    format!(
        "Factory - Performing core factory functions using {}",
        product.operation()
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

impl Factory for ConcreteFactory1 {
    fn factory_method(&self) -> Box<dyn Product> {
        debug!(product = "ConcreteProduct1", "製品を生成");
        Box::new(ConcreteProduct1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl Factory for ConcreteFactory2 {
    fn factory_method(&self) -> Box<dyn Product> {
        debug!(product = "ConcreteProduct2", "製品を生成");
        Box::new(ConcreteProduct2)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "Result of concrete product 1 operation".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "Result of concrete product 2 operation".to_string()
    }
}

pub fn client_code(factory: &dyn Factory, out: &dyn Output) {
    out.line(&format!("Client: implementing {}", factory_function(factory)));
}
