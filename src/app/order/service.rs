//! 订单/购物车业务服务
//!
//! 单价在加入订单时抓取快照，之后不再回读商品。
//! 每次修改后 total 全量重算，total == Σ 行小计是不变式。

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::model::{
    CreateOrderRequest, Order, OrderDetails, OrderItem, OrderItemDetails, OrderItemRequest,
};
use crate::app::product::model::Product;
use crate::core::error::AppError;
use crate::infrastructure::store::DocumentStore;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<DocumentStore>,
}

impl OrderService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let mut orders = self.store.orders.find_all()?;
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }

    /// 详情视图：逐行带出商品记录，已删除的商品置 null
    pub fn order_details(&self, order_id: Uuid) -> Result<OrderDetails, AppError> {
        let order = self.find_order(order_id)?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in &order.items {
            let product = self.store.products.find(item.product)?;
            items.push(OrderItemDetails {
                product,
                quantity: item.quantity,
                price: item.price,
            });
        }

        Ok(OrderDetails {
            id: order.id,
            total: order.total,
            items,
            created_at: order.created_at,
            updated_at: order.updated_at,
        })
    }

    /// 整单创建：任何一个商品缺失都拒绝整单，不落任何数据
    pub fn create_order(&self, req: CreateOrderRequest) -> Result<Order, AppError> {
        let now = Utc::now();
        let mut order = Order {
            id: Uuid::new_v4(),
            total: 0.0,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        for line in &req.order_item {
            let quantity = positive_quantity(line.quantity)?;
            let product = self.find_product(line.product_id)?;

            // 同一商品出现多次时合并成一行
            match order.item_index(product.id) {
                Some(idx) => order.items[idx].quantity += quantity,
                None => order.items.push(OrderItem {
                    product: product.id,
                    quantity,
                    price: product.price,
                }),
            }
        }

        order.recompute_total();
        if !order.total.is_finite() {
            return Err(AppError::invalid("total", "order total is not a finite number"));
        }

        self.store.orders.insert(order.id, order.clone())?;
        Ok(order)
    }

    pub fn add_item(&self, order_id: Uuid, req: OrderItemRequest) -> Result<Order, AppError> {
        let mut order = self.find_order(order_id)?;
        let quantity = positive_quantity(req.quantity)?;
        let product = self.find_product(req.product_id)?;

        // 已有行只加数量，单价保持最初的快照
        match order.item_index(product.id) {
            Some(idx) => order.items[idx].quantity += quantity,
            None => order.items.push(OrderItem {
                product: product.id,
                quantity,
                price: product.price,
            }),
        }

        self.persist(order)
    }

    /// 数量置 0 删行；商品尚无行且数量 > 0 时按当前价新增一行
    pub fn update_item_quantity(
        &self,
        order_id: Uuid,
        req: OrderItemRequest,
    ) -> Result<Order, AppError> {
        let mut order = self.find_order(order_id)?;

        if req.quantity < 0 {
            return Err(AppError::invalid("quantity", "quantity must not be negative"));
        }
        let quantity = u32::try_from(req.quantity)
            .map_err(|_| AppError::invalid("quantity", "quantity is out of range"))?;

        let product = self.find_product(req.product_id)?;

        if quantity == 0 {
            order.items.retain(|item| item.product != product.id);
        } else {
            match order.item_index(product.id) {
                Some(idx) => order.items[idx].quantity = quantity,
                None => order.items.push(OrderItem {
                    product: product.id,
                    quantity,
                    price: product.price,
                }),
            }
        }

        self.persist(order)
    }

    pub fn remove_item(&self, order_id: Uuid, product_id: Uuid) -> Result<Order, AppError> {
        let mut order = self.find_order(order_id)?;

        let before = order.items.len();
        order.items.retain(|item| item.product != product_id);
        if order.items.len() == before {
            return Err(AppError::not_found(
                "Could not find this product in the order.",
            ));
        }

        self.persist(order)
    }

    pub fn delete_order(&self, order_id: Uuid) -> Result<(), AppError> {
        if !self.store.orders.remove(order_id)? {
            return Err(AppError::not_found("Could not find order for this id."));
        }
        Ok(())
    }

    /// 重算 total 后整文档写回；订单在读取后被并发删除时按 404 处理
    fn persist(&self, mut order: Order) -> Result<Order, AppError> {
        order.recompute_total();
        order.updated_at = Utc::now();
        if !self.store.orders.replace(order.id, order.clone())? {
            return Err(AppError::not_found("Could not find order for this id."));
        }
        Ok(order)
    }

    fn find_order(&self, order_id: Uuid) -> Result<Order, AppError> {
        self.store
            .orders
            .find(order_id)?
            .ok_or_else(|| AppError::not_found("Could not find order for this id."))
    }

    fn find_product(&self, product_id: Uuid) -> Result<Product, AppError> {
        self.store
            .products
            .find(product_id)?
            .ok_or_else(|| AppError::not_found("Could not find product for this id."))
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, AppError> {
    if quantity < 1 {
        return Err(AppError::invalid(
            "quantity",
            "quantity must be a positive integer",
        ));
    }
    u32::try_from(quantity).map_err(|_| AppError::invalid("quantity", "quantity is out of range"))
}
