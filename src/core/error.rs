//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::response::ApiResponse;
use crate::app::inventory::{model::REQUIRED_FIELDS, store::StoreError};

/// 核心错误类型，所有面向客户端的失败都经由它转换为 JSON 信封
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Missing required fields: {}", REQUIRED_FIELDS.join(", "))]
    MissingFields,

    #[error("Product with id '{0}' already exists")]
    DuplicateId(String),

    #[error("Product with id '{0}' not found")]
    ProductNotFound(String),

    #[error("Route '{method} {path}' not found")]
    RouteNotFound { method: String, path: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::InvalidQuery(_) | AppError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            AppError::DuplicateId(_) => StatusCode::CONFLICT,
            AppError::ProductNotFound(_) | AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(id) => AppError::DuplicateId(id),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body: ApiResponse<()> = ApiResponse::failure(self.to_string());
        (status, Json(body)).into_response()
    }
}
