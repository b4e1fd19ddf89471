//! 订单处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::model::{CreateOrderRequest, Order, OrderDetails, OrderItemRequest};
use crate::core::error::AppError;
use crate::core::response::MessageResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

#[derive(Serialize)]
pub struct OrderDetailsResponse {
    pub order: OrderDetails,
}

/// 购物车修改统一返回消息 + 最新订单
#[derive(Serialize)]
pub struct OrderMutationResponse {
    pub message: String,
    pub order: Order,
}

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<OrderListResponse>, AppError> {
    let orders = state.orders.list_orders()?;
    Ok(Json(OrderListResponse { orders }))
}

pub async fn order_details(
    State(state): State<AppState>,
    Path(oid): Path<Uuid>,
) -> Result<Json<OrderDetailsResponse>, AppError> {
    let order = state.orders.order_details(oid)?;
    Ok(Json(OrderDetailsResponse { order }))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = state.orders.create_order(req)?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(oid): Path<Uuid>,
    Json(req): Json<OrderItemRequest>,
) -> Result<Json<OrderMutationResponse>, AppError> {
    let order = state.orders.add_item(oid, req)?;
    Ok(Json(OrderMutationResponse {
        message: "Product added to the order.".to_string(),
        order,
    }))
}

pub async fn update_item_quantity(
    State(state): State<AppState>,
    Path(oid): Path<Uuid>,
    Json(req): Json<OrderItemRequest>,
) -> Result<Json<OrderMutationResponse>, AppError> {
    let order = state.orders.update_item_quantity(oid, req)?;
    Ok(Json(OrderMutationResponse {
        message: "Product quantity updated in the order.".to_string(),
        order,
    }))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path((oid, pid)): Path<(Uuid, Uuid)>,
) -> Result<Json<OrderMutationResponse>, AppError> {
    let order = state.orders.remove_item(oid, pid)?;
    Ok(Json(OrderMutationResponse {
        message: "Product removed from the order.".to_string(),
        order,
    }))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(oid): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.orders.delete_order(oid)?;
    Ok(Json(MessageResponse::new("Order deleted successfully.")))
}
