//! 类目模块

pub mod handler;
pub mod model;
pub mod service;

use axum::{routing::get, Router};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_categories).post(handler::create_category),
        )
        .route(
            "/:cid",
            get(handler::get_category)
                .patch(handler::update_category)
                .delete(handler::delete_category),
        )
}
