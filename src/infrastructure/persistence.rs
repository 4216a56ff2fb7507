//! JSON 文件持久化
//!
//! 启动时一次性读取整个文件，每次变更后整体重写。
//! 写入先落到同目录下的临时文件，再原子重命名覆盖目标文件。

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::app::inventory::model::Product;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("读取数据文件 {path} 失败: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("解析数据文件 {path} 失败: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("序列化产品数据失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("写入数据文件 {path} 失败: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl PersistenceError {
    /// 数据文件尚不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Vec<Product>, PersistenceError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| PersistenceError::Read {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<Value> =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        // 单条记录不合法只丢弃该条，其余记录照常加载
        let products: Vec<Product> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!("丢弃数据文件中第 {} 条无效记录: {}", index, e);
                    None
                }
            })
            .collect();

        Ok(products)
    }

    pub async fn save(&self, products: &[Product]) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(products)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|source| self.write_error(source))?;
        file.write_all(&json)
            .await
            .map_err(|source| self.write_error(source))?;
        file.sync_all()
            .await
            .map_err(|source| self.write_error(source))?;
        drop(file);

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| self.write_error(source))
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("products.json");
        self.path.with_file_name(format!("{file_name}.tmp"))
    }

    fn write_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> Vec<Product> {
        let value = json!([
            { "id": "A", "name": "Anvil", "category": "tools", "price": 120, "stock": 2, "weight_kg": 50.0 },
            { "id": "B", "name": "Bolt", "category": "parts", "price": 0.1, "stock": 900, "weight_kg": 0.01, "sku": "B-77" }
        ]);
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn save_then_load_preserves_records_and_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("products.json"));

        store.save(&sample()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, sample());
        assert_eq!(loaded[1].extra.get("sku"), Some(&json!("B-77")));
    }

    #[tokio::test]
    async fn save_creates_parent_directory_and_pretty_prints() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("products.json");
        let store = JsonFileStore::new(&path);

        store.save(&sample()).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(!dir.path().join("data").join("products.json.tmp").exists());
    }

    #[tokio::test]
    async fn missing_file_is_reported_as_not_found() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        let err = store.load().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::Parse { .. }));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn invalid_records_are_skipped_individually() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        let contents = json!([
            { "id": "A", "name": "Anvil", "category": "tools", "price": 120, "stock": 2, "weight_kg": 50.0 },
            { "id": "B", "name": "Bolt", "category": "parts", "price": 0.1, "stock": 900 },
            { "id": 7, "name": "Cog", "category": "parts", "price": 1, "stock": 1, "weight_kg": 0.1 },
            "not a record"
        ]);
        std::fs::write(&path, contents.to_string()).unwrap();

        let loaded = JsonFileStore::new(&path).load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "A");
    }

    #[tokio::test]
    async fn non_array_document_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, r#"{"id": "A"}"#).unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::Parse { .. }));
    }

    #[tokio::test]
    async fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("products.json"));

        store.save(&sample()).await.unwrap();
        store.save(&sample()[..1]).await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
