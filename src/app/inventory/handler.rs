//! 库存处理器

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use super::{model::Product, service::InventoryService};
use crate::core::{error::AppError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<InventoryService>,
}

impl AppState {
    pub fn new(inventory: InventoryService) -> Self {
        Self {
            inventory: Arc::new(inventory),
        }
    }
}

/// API 信息
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Inventory Service API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /products": "Get all products",
            "GET /products?id=PROD-xx": "Get product by ID",
            "POST /products": "Add new product"
        }
    }))
}

/// 获取产品：带 `id` 时返回单个产品，否则返回全部
///
/// 查询串按原始键值对解析；重复的 `id` 参数拼接后一定查不到。
pub async fn get_products(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = query.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
    let ids: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .collect();

    match ids.as_slice() {
        // 空 id 视同未提供
        [] => list_all(&state).await,
        [id] if id.is_empty() => list_all(&state).await,
        [id] => {
            let product = state.inventory.get_product(id).await?;
            Ok(Json(ApiResponse::success(product)).into_response())
        }
        many => Err(AppError::ProductNotFound(many.join(","))),
    }
}

async fn list_all(state: &AppState) -> Result<Response, AppError> {
    let products = state.inventory.list_products().await;
    Ok(Json(ApiResponse::listing(products)).into_response())
}

/// 创建新产品
///
/// 请求体整体读入后再解析，不做流式处理。
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let body = body.map_err(|e| AppError::InvalidJson(e.body_text()))?;
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidJson(e.to_string()))?;
    let product = Product::from_json(payload)?;

    let created = state.inventory.create_product(product).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            created,
            "Product added successfully",
        )),
    ))
}

/// 未匹配的路由
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
