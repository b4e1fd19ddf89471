//! 商品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub count_in_stock: u32,
    pub image: String,
    pub quantity: u32,
    /// 可空的类目引用；类目删除时级联置空
    pub category: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建和更新共用的请求体；PATCH 同样要求全部字段，整体覆盖
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 5, message = "description must be at least 5 characters"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "price must be a non-negative number"))]
    pub price: f64,

    pub count_in_stock: u32,

    pub image: String,

    pub quantity: u32,

    pub category: Option<Uuid>,
}
