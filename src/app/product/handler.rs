//! 商品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::model::{Product, ProductRequest};
use crate::core::error::AppError;
use crate::core::response::MessageResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    let products = state.products.list_products()?;
    Ok(Json(ProductListResponse { products }))
}

pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(cid): Path<Uuid>,
) -> Result<Json<ProductListResponse>, AppError> {
    let products = state.products.list_products_by_category(cid)?;
    Ok(Json(ProductListResponse { products }))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(pid): Path<Uuid>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.get_product(pid)?;
    Ok(Json(ProductResponse { product }))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = state.products.create_product(req)?;
    Ok((StatusCode::CREATED, Json(ProductResponse { product })))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<Uuid>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.update_product(pid, req)?;
    Ok(Json(ProductResponse { product }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.products.delete_product(pid)?;
    Ok(Json(MessageResponse::new("Deleted product.")))
}
