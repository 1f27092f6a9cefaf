//! 生成に関するデザインパターンの実行可能な例
//!
//! - [`abstract_factory`] - 互換性のある製品ファミリーをまとめて生成する
//! - [`factory_method`] - 処理の流れを固定し、生成ステップだけを差し替える
//!
//! どちらも設定値（対象プラットフォーム名）から具象ファクトリーを選択し、
//! 未知のプラットフォームは [`core::PatternError::UnsupportedPlatform`] になる。

pub mod abstract_factory;
pub mod cli;
pub mod core;
pub mod factory_method;

pub use crate::core::{
    ApplicationConfig, ConsoleOutput, Output, PatternError, PatternResult, RecordingOutput,
};
