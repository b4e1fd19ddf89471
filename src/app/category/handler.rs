//! 类目处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::model::{Category, CategoryRequest};
use crate::core::error::AppError;
use crate::core::response::MessageResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.categories.list_categories()?;
    Ok(Json(CategoryListResponse { categories }))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(cid): Path<Uuid>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state.categories.get_category(cid)?;
    Ok(Json(CategoryResponse { category }))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let category = state.categories.create_category(req)?;
    Ok((StatusCode::CREATED, Json(CategoryResponse { category })))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(cid): Path<Uuid>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state.categories.update_category(cid, req)?;
    Ok(Json(CategoryResponse { category }))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(cid): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.categories.delete_category(cid)?;
    Ok(Json(MessageResponse::new("Deleted category.")))
}
