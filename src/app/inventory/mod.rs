//! 库存记录：模型、内存存储、业务服务与 HTTP 处理器

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use handler::AppState;
pub use model::Product;
pub use service::InventoryService;
pub use store::{ProductStore, StoreError};
