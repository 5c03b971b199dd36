//! Storage Backend Abstraction
//!
//! 保存先の抽象化（シリアライズ形式には関与しない）

use std::io;

#[cfg(test)]
use mockall::automock;

/// Trait for raw collection storage
/// This enables mocking I/O failures in tests while using the file system in production
#[cfg_attr(test, automock)]
pub trait StorageBackend: Send + Sync {
    /// コレクションの内容を読み込む（未作成なら `None`）
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// コレクションの内容を全て置き換える
    ///
    /// 書き込みは全体が成功するか、既存の内容が残るかのどちらかであること
    fn write_atomic(&self, name: &str, contents: &[u8]) -> io::Result<()>;

    /// 保存済みのコレクション名を列挙する
    fn list(&self) -> io::Result<Vec<String>>;
}
