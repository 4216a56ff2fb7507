//! 路由装配

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::inventory::handler::{self, AppState};
use crate::core::middleware::{cors_middleware, request_logging_middleware};

/// 构建完整路由
///
/// 已知路径上不支持的方法与未知路径一样返回 404 信封，而不是 405。
/// `get` 默认会应答 HEAD，这里显式把 HEAD 交给 404 处理器。
/// 请求体不设大小上限，整体读入后再处理。
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handler::api_info)
                .head(handler::route_not_found)
                .fallback(handler::route_not_found),
        )
        .route(
            "/products",
            get(handler::get_products)
                .post(handler::create_product)
                .head(handler::route_not_found)
                .fallback(handler::route_not_found),
        )
        .fallback(handler::route_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
