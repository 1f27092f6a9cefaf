// 出力先の抽象化
//
// 例のトレースはすべてこのトレイト経由で書き出す。
// 実行時はコンソール、テスト時は記録用の実装を差し込む。

use std::sync::{Arc, Mutex, PoisonError};

/// トレース出力を抽象化するトレイト
pub trait Output {
    /// 1行を書き出す
    fn line(&self, text: &str);

    /// 空行を書き出す
    fn blank(&self) {
        self.line("");
    }
}

impl<T: Output + ?Sized> Output for &T {
    fn line(&self, text: &str) {
        (**self).line(text)
    }
}

/// 標準出力に書き出す実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// 何も出力しない実装（ベンチマーク用）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpOutput;

impl NoOpOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for NoOpOutput {
    fn line(&self, _text: &str) {}
}

/// 書き出された行をメモリに記録する実装
///
/// クローン同士は同じバッファを共有する。
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの行を取得
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Output for RecordingOutput {
    fn line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}
