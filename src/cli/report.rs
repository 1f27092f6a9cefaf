// 失敗時に標準エラーへ出すメッセージの組み立て

use crate::core::PatternError;

/// エラー本文とコンテキスト（操作・リソース・提案）を複数行にまとめる
pub fn format_failure(error: &PatternError) -> String {
    let context = error.context();
    let mut message = format!("❌ エラー: {error}\n   操作: {}", context.operation);
    if let Some(resource) = &context.resource {
        message.push_str(&format!("\n   対象: {resource}"));
    }
    if let Some(suggestion) = &context.suggestion {
        message.push_str(&format!("\n💡 {suggestion}"));
    }
    message
}
