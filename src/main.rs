//! 服务入口

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use shop_api::infrastructure::config::Config;
use shop_api::infrastructure::logger::Logger;
use shop_api::infrastructure::store::DocumentStore;
use shop_api::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    Logger::init(&config.log.level);

    let store = Arc::new(DocumentStore::new());
    let state = AppState::new(store);
    let router = app(state, &config);

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("shop-api listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
