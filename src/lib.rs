//! # 库存记录服务
//!
//! 通过 HTTP 暴露产品记录，并把完整集合持久化到单个 JSON 文件：
//! - 启动时一次性加载数据文件，缺失或损坏时以空集合启动
//! - 每次创建后整体重写数据文件
//! - 所有响应统一使用 `{success, message?, total?, data?}` 信封

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::inventory::{AppState, InventoryService, Product, ProductStore, StoreError};
pub use app::router::build_router;
pub use infrastructure::config::Config;
pub use infrastructure::persistence::{JsonFileStore, PersistenceError};

/// 打开数据文件并构建可直接服务的路由
pub async fn build_app(config: &Config) -> axum::Router {
    let persistence = JsonFileStore::new(&config.storage.data_file);
    let inventory = InventoryService::open(persistence).await;
    build_router(AppState::new(inventory))
}
