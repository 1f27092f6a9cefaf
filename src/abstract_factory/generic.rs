//! Abstract Factory の汎用例
//!
//! 関連する製品ファミリーを、具象型を指定せずにまとめて生成する。
//! 1つのファクトリーから得た製品はすべて同じモデルに属する。

use crate::core::Output;
use std::fmt;
use tracing::debug;

/// 製品のモデル（互換性を保証するタグ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Model1,
    Model2,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Model1, Model::Model2];

    pub const fn number(&self) -> u8 {
        match self {
            Self::Model1 => 1,
            Self::Model2 => 2,
        }
    }

    /// このモデルの製品を作る具象ファクトリーを取得
    pub fn factory(&self) -> Box<dyn AbstractFactory> {
        match self {
            Self::Model1 => Box::new(Model1Factory),
            Self::Model2 => Box::new(Model2Factory),
        }
    }

    /// 起動ログに表示するファクトリー名
    pub const fn factory_name(&self) -> &'static str {
        match self {
            Self::Model1 => "Concrete_Model1_Factory",
            Self::Model2 => "Concrete_Model2_Factory",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model {}", self.number())
    }
}

/// 具象ファクトリーが生成しなければならない製品ファミリーの定義
pub trait AbstractFactory {
    /// ファミリーAの製品を返す
    fn create_product_family_a(&self) -> Box<dyn ProductFamilyA>;

    /// ファミリーBの製品を返す
    fn create_product_family_b(&self) -> Box<dyn ProductFamilyB>;
}

/// ファミリーAの製品が実装するコア機能
pub trait ProductFamilyA {
    fn model(&self) -> Model;

    fn core_function_a(&self) -> String;
}

/// ファミリーBの製品が実装するコア機能
pub trait ProductFamilyB {
    fn model(&self) -> Model;

    fn core_function_b(&self) -> String;

    /// 同じモデルの「互換」製品と連携する
    ///
    /// モデルの一致は実行時に検査しない。呼び出し側が同じファクトリーから
    /// 両方の製品を取得することが前提。
    fn other_core_function_b(&self, compatible_product: &dyn ProductFamilyA) -> String;
}

fn family_a_result(model: Model) -> String {
    format!("Result of Family A {model} product's core function.")
}

fn family_b_result(model: Model) -> String {
    format!("Result of Family B {model} product's core function.")
}

fn combined_result(model: Model, compatible_product: &dyn ProductFamilyA) -> String {
    let result = compatible_product.core_function_a();
    format!(
        "Result of other Core Function of Family B {model} product - \
         \n\treturning result of compatible product: {result}"
    )
}

/// モデル1の製品ファミリーを生成するファクトリー
#[derive(Debug, Clone, Copy, Default)]
pub struct Model1Factory;

impl AbstractFactory for Model1Factory {
    fn create_product_family_a(&self) -> Box<dyn ProductFamilyA> {
        debug!(model = %Model::Model1, "ファミリーAの製品を生成");
        Box::new(ProductAModel1)
    }

    fn create_product_family_b(&self) -> Box<dyn ProductFamilyB> {
        debug!(model = %Model::Model1, "ファミリーBの製品を生成");
        Box::new(ProductBModel1)
    }
}

/// モデル2の製品ファミリーを生成するファクトリー
#[derive(Debug, Clone, Copy, Default)]
pub struct Model2Factory;

impl AbstractFactory for Model2Factory {
    fn create_product_family_a(&self) -> Box<dyn ProductFamilyA> {
        debug!(model = %Model::Model2, "ファミリーAの製品を生成");
        Box::new(ProductAModel2)
    }

    fn create_product_family_b(&self) -> Box<dyn ProductFamilyB> {
        debug!(model = %Model::Model2, "ファミリーBの製品を生成");
        Box::new(ProductBModel2)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductAModel1;

impl ProductFamilyA for ProductAModel1 {
    fn model(&self) -> Model {
        Model::Model1
    }

    fn core_function_a(&self) -> String {
        family_a_result(Model::Model1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductBModel1;

impl ProductFamilyB for ProductBModel1 {
    fn model(&self) -> Model {
        Model::Model1
    }

    fn core_function_b(&self) -> String {
        family_b_result(Model::Model1)
    }

    fn other_core_function_b(&self, compatible_product: &dyn ProductFamilyA) -> String {
        combined_result(Model::Model1, compatible_product)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductAModel2;

impl ProductFamilyA for ProductAModel2 {
    fn model(&self) -> Model {
        Model::Model2
    }

    fn core_function_a(&self) -> String {
        family_a_result(Model::Model2)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductBModel2;

impl ProductFamilyB for ProductBModel2 {
    fn model(&self) -> Model {
        Model::Model2
    }

    fn core_function_b(&self) -> String {
        family_b_result(Model::Model2)
    }

    fn other_core_function_b(&self, compatible_product: &dyn ProductFamilyA) -> String {
        combined_result(Model::Model2, compatible_product)
    }
}

/// 渡されたファクトリーだけを使って両ファミリーの製品を作り、結果を出力する
pub fn client_code(factory: &dyn AbstractFactory, out: &dyn Output) {
    let product_a = factory.create_product_family_a();
    let product_b = factory.create_product_family_b();

    out.line(&format!(
        "Client - implementing core function of product_b: {}",
        product_b.core_function_b()
    ));
    out.line(&format!(
        "Client - implementing other core function of product_b:  {}",
        product_b.other_core_function_b(product_a.as_ref())
    ));
}
