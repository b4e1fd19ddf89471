//! 商品模块

pub mod handler;
pub mod model;
pub mod service;

use axum::{routing::get, Router};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_products).post(handler::create_product),
        )
        .route("/category/:cid", get(handler::list_products_by_category))
        .route(
            "/:pid",
            get(handler::get_product)
                .patch(handler::update_product)
                .delete(handler::delete_product),
        )
}
