//! 库存数据模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::AppError;

/// 创建产品时必须出现的字段
pub const REQUIRED_FIELDS: [&str; 6] = ["id", "name", "category", "price", "stock", "weight_kg"];

/// 库存产品记录
///
/// `price`、`stock`、`weight_kg` 只校验是否存在，按原始 JSON 值保存；
/// 其它未知字段原样保留在 `extra` 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Value,
    pub stock: Value,
    pub weight_kg: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// 从已解析的请求体构造产品，缺少必填字段时返回 `MissingFields`
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        let Value::Object(mut fields) = value else {
            return Err(AppError::MissingFields);
        };

        let id = take_text(&mut fields, "id")?;
        let name = take_text(&mut fields, "name")?;
        let category = take_text(&mut fields, "category")?;
        let price = take_present(&mut fields, "price")?;
        let stock = take_present(&mut fields, "stock")?;
        let weight_kg = take_present(&mut fields, "weight_kg")?;

        Ok(Self {
            id,
            name,
            category,
            price,
            stock,
            weight_kg,
            extra: fields,
        })
    }
}

// 空字符串与缺失同等对待
fn take_text(fields: &mut Map<String, Value>, key: &str) -> Result<String, AppError> {
    match fields.remove(key) {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        _ => Err(AppError::MissingFields),
    }
}

// null 视为已提供
fn take_present(fields: &mut Map<String, Value>, key: &str) -> Result<Value, AppError> {
    fields.remove(key).ok_or(AppError::MissingFields)
}
