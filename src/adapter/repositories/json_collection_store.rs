//! JSON Collection Store Implementation
//!
//! CollectionStoreのJSON実装（コレクション全件をJSONファイルで永続化）

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::adapter::storage::{FileBackend, StorageBackend};
use crate::domain::entities::Record;
use crate::domain::repositories::collection_store::{
    validate_collection_name, CollectionStore, StoreError,
};

/// 保存ファイルの外側の構造（書き込み用）
#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    collection: &'a str,
    saved_at: DateTime<Utc>,
    records: &'a [T],
}

/// 保存ファイルの外側の構造（読み込み用）
#[derive(Deserialize)]
struct Envelope<T> {
    collection: String,
    #[allow(dead_code)]
    saved_at: DateTime<Utc>,
    records: Vec<T>,
}

/// JSONベースのコレクションストア
///
/// 全エンティティ種別で共通の実装。種別ごとのスキーマは `Record` 実装が決める。
pub struct JsonCollectionStore<B: StorageBackend = FileBackend> {
    backend: B,
    pretty: bool,
}

impl JsonCollectionStore<FileBackend> {
    /// データディレクトリを保存先とするストアを作成
    pub fn open(data_dir: impl Into<std::path::PathBuf>, pretty: bool) -> Self {
        Self::with_backend(FileBackend::new(data_dir), pretty)
    }
}

impl<B: StorageBackend> JsonCollectionStore<B> {
    pub fn with_backend(backend: B, pretty: bool) -> Self {
        Self { backend, pretty }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 保存済みのコレクション名を列挙する
    pub fn collections(&self) -> Result<Vec<String>> {
        self.backend
            .list()
            .context("Failed to list stored collections")
    }

    fn encode<T: Record>(&self, name: &str, items: &[T]) -> Result<Vec<u8>, StoreError> {
        let envelope = EnvelopeRef {
            collection: name,
            saved_at: Utc::now(),
            records: items,
        };

        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&envelope)
        } else {
            serde_json::to_vec(&envelope)
        };

        encoded.map_err(|e| StoreError::encode(name, e))
    }

    fn decode<T: Record>(name: &str, bytes: &[u8]) -> Result<Vec<T>, StoreError> {
        let envelope: Envelope<T> =
            serde_json::from_slice(bytes).map_err(|e| StoreError::corrupt(name, e))?;

        if envelope.collection != name {
            return Err(StoreError::corrupt(
                name,
                format!("file holds collection '{}'", envelope.collection),
            ));
        }

        Ok(envelope.records)
    }
}

impl<B: StorageBackend> CollectionStore for JsonCollectionStore<B> {
    fn save<T: Record>(&self, name: &str, items: &[T]) -> Result<(), StoreError> {
        validate_collection_name(name)?;

        let bytes = self.encode(name, items)?;
        self.backend
            .write_atomic(name, &bytes)
            .map_err(|e| StoreError::io(name, e))?;

        info!("Saved collection {}: {} records", name, items.len());

        Ok(())
    }

    fn load<T: Record>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        validate_collection_name(name)?;

        let bytes = match self.backend.read(name).map_err(|e| StoreError::io(name, e))? {
            Some(bytes) => bytes,
            None => {
                debug!("No stored collection {}, starting empty", name);
                return Ok(Vec::new());
            }
        };

        let records = Self::decode(name, &bytes)?;
        info!("Loaded collection {}: {} records", name, records.len());

        Ok(records)
    }
}
