//! 订单数据模型
//!
//! 订单内嵌行项目，行项目持有下单时抓取的单价快照，
//! 之后商品改价或删除都不会影响历史订单金额。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::product::model::Product;

/// 订单行：商品引用 + 数量 + 单价快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Uuid,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// 派生值，恒等于行小计之和
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// 全量重算 total；所有修改路径统一走这里，不做增量更新
    pub fn recompute_total(&mut self) {
        self.total = self.items.iter().map(OrderItem::subtotal).sum();
    }

    pub fn item_index(&self, product_id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.product == product_id)
    }
}

/// 创建订单请求体，字段名保持线上格式
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "orderItem")]
    pub order_item: Vec<OrderItemRequest>,
}

/// 单个行项目请求，创建与购物车操作共用
#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    #[serde(rename = "productID")]
    pub product_id: Uuid,
    pub quantity: i64,
}

/// 详情视图：每行带出完整商品记录；商品已删除时为 null，快照仍保留
#[derive(Debug, Serialize)]
pub struct OrderDetails {
    pub id: Uuid,
    pub total: f64,
    pub items: Vec<OrderItemDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OrderItemDetails {
    pub product: Option<Product>,
    pub quantity: u32,
    pub price: f64,
}
