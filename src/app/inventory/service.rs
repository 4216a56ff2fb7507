//! 库存业务服务

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::{model::Product, store::ProductStore};
use crate::core::error::AppError;
use crate::infrastructure::persistence::JsonFileStore;

/// 持有内存存储与持久化适配器
///
/// 所有访问都经过同一把互斥锁；创建路径在持锁期间完成
/// 唯一性检查、追加与落盘，对其它请求而言是一个整体。
pub struct InventoryService {
    store: Mutex<ProductStore>,
    persistence: JsonFileStore,
}

impl InventoryService {
    /// 从数据文件加载；文件缺失或损坏时以空集合启动
    pub async fn open(persistence: JsonFileStore) -> Self {
        let products = match persistence.load().await {
            Ok(products) => {
                info!("✓ 已加载 {} 个产品", products.len());
                products
            }
            Err(e) if e.is_not_found() => {
                warn!(
                    "数据文件 {} 不存在，以空集合启动",
                    persistence.path().display()
                );
                Vec::new()
            }
            Err(e) => {
                warn!("加载数据失败，以空集合启动: {}", e);
                Vec::new()
            }
        };

        Self {
            store: Mutex::new(ProductStore::from_products(products)),
            persistence,
        }
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.store.lock().await.list().to_vec()
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        self.store
            .lock()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::ProductNotFound(id.to_string()))
    }

    /// 插入新产品并整体重写数据文件
    ///
    /// 落盘失败只记录日志，内存中的插入不回滚。
    pub async fn create_product(&self, product: Product) -> Result<Product, AppError> {
        let mut store = self.store.lock().await;
        store.insert(product.clone())?;

        match self.persistence.save(store.list()).await {
            Ok(()) => info!("✓ 数据已保存 ({} 个产品)", store.len()),
            Err(e) => error!("保存数据失败: {}", e),
        }

        Ok(product)
    }

    pub async fn count(&self) -> usize {
        self.store.lock().await.len()
    }
}
