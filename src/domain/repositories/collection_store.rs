//! # Collection Store Trait
//!
//! エンティティコレクションの永続化を抽象化

use std::io;
use thiserror::Error;

use crate::domain::entities::Record;

/// 永続化エラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// 保存内容が期待する形式として解釈できない
    #[error("collection '{collection}' is corrupt: {reason}")]
    CorruptData { collection: String, reason: String },

    /// 保存先の読み書きに失敗した
    #[error("I/O failure on collection '{collection}': {source}")]
    Io {
        collection: String,
        #[source]
        source: io::Error,
    },

    /// 保存前のシリアライズに失敗した（保存先には書き込んでいない）
    #[error("failed to encode collection '{collection}': {reason}")]
    Encode { collection: String, reason: String },

    /// コレクション名が不正
    #[error("invalid collection name: '{0}'")]
    InvalidName(String),
}

impl StoreError {
    pub fn corrupt(collection: &str, reason: impl ToString) -> Self {
        Self::CorruptData {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn encode(collection: &str, reason: impl ToString) -> Self {
        Self::Encode {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(collection: &str, source: io::Error) -> Self {
        Self::Io {
            collection: collection.to_string(),
            source,
        }
    }
}

/// コレクション名の検証
///
/// 空でなく、ASCII英数字・`_`・`-` のみで構成されること。
pub fn validate_collection_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// コレクションストア
///
/// 1種類のエンティティの全件を名前付きの保存先へ丸ごと保存・読み込みする。
/// 部分更新やマージは行わない。
pub trait CollectionStore: Send + Sync {
    /// コレクションを保存する
    ///
    /// 既存の内容は全件置き換えられる。失敗時は既存の内容が残る。
    ///
    /// # Arguments
    ///
    /// * `name` - コレクション名
    /// * `items` - 保存するエンティティ（順序は保持される）
    ///
    /// # Errors
    ///
    /// シリアライズに失敗した場合に `StoreError::Encode`、
    /// 書き込みに失敗した場合に `StoreError::Io` を返す
    fn save<T: Record>(&self, name: &str, items: &[T]) -> Result<(), StoreError>;

    /// コレクションを読み込む
    ///
    /// 一度も保存されていない名前の場合は空のベクターを返す。
    ///
    /// # Errors
    ///
    /// 内容が解釈できない場合に `StoreError::CorruptData`、
    /// 読み込みに失敗した場合に `StoreError::Io` を返す
    fn load<T: Record>(&self, name: &str) -> Result<Vec<T>, StoreError>;

    /// エンティティ種別のコレクション名で保存する
    fn save_all<T: Record>(&self, items: &[T]) -> Result<(), StoreError> {
        self.save(T::COLLECTION, items)
    }

    /// エンティティ種別のコレクション名で読み込む
    fn load_all<T: Record>(&self) -> Result<Vec<T>, StoreError> {
        self.load(T::COLLECTION)
    }
}
