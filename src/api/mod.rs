pub mod chains;
pub mod force_close;
pub mod health;

use crate::config::Config;
use crate::domain::MarketBook;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub markets: Arc<MarketBook>,
}

impl AppState {
    pub fn new(config: Config, markets: MarketBook) -> Self {
        Self {
            config,
            markets: Arc::new(markets),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/chains", get(chains::list_chains))
        .route("/v1/chains/:chain_id", get(chains::get_chain))
        .route("/v1/force-close/preview", post(force_close::preview))
        .layer(cors)
        .with_state(state)
}
