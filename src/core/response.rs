//! 核心响应处理模块

use serde::Serialize;

/// API 响应信封：`{success, message?, total?, data?}`
///
/// 不携带时间戳或请求 ID，保证重复读取得到完全相同的响应体。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            total: None,
            data: Some(data),
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            total: None,
            data: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// 列表响应，附带记录总数
    pub fn listing(items: Vec<T>) -> Self {
        Self {
            total: Some(items.len()),
            ..Self::success(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_omits_data_and_total() {
        let body = serde_json::to_value(ApiResponse::<()>::failure("boom")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "boom" }));
    }

    #[test]
    fn listing_reports_total() {
        let body = serde_json::to_value(ApiResponse::listing(vec![1, 2, 3])).unwrap();
        assert_eq!(body, json!({ "success": true, "total": 3, "data": [1, 2, 3] }));
    }

    #[test]
    fn message_and_data() {
        let body = serde_json::to_value(ApiResponse::with_message("x", "ok")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "ok", "data": "x" }));
    }
}
