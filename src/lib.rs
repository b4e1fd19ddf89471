//! # shop-api
//!
//! 商品 / 类目 / 购物车订单的 CRUD 后端，包括：
//! - core: 错误分类、响应结构、请求日志中间件
//! - infrastructure: 配置、日志初始化、文档存储
//! - app: 按领域划分的 model / handler / service

pub mod app;
pub mod core;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, middleware, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::category::service::CategoryService;
use crate::app::order::service::OrderService;
use crate::app::product::service::ProductService;
use crate::core::response::MessageResponse;
use crate::infrastructure::config::Config;
use crate::infrastructure::store::DocumentStore;

/// 应用共享状态：三个领域服务共享同一个文档存储
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub categories: CategoryService,
    pub orders: OrderService,
}

impl AppState {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            products: ProductService::new(store.clone()),
            categories: CategoryService::new(store.clone()),
            orders: OrderService::new(store),
        }
    }
}

/// 组装完整路由
pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .nest("/product", crate::app::product::routes())
        .nest("/category", crate::app::category::routes())
        .nest("/order", crate::app::order::routes())
        .fallback(fallback)
        .layer(middleware::from_fn(crate::core::middleware::request_logging))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.http.timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 未匹配路由统一 404
async fn fallback() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Could not find this route.")),
    )
}
