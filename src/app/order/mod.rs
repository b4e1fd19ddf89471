//! 订单/购物车模块

pub mod handler;
pub mod model;
pub mod service;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_orders).post(handler::create_order))
        .route(
            "/:oid",
            get(handler::order_details)
                .post(handler::add_item)
                .patch(handler::update_item_quantity)
                .delete(handler::delete_order),
        )
        .route("/:oid/:pid", delete(handler::remove_item))
}
