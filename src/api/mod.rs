pub mod calculate;
pub mod health;
pub mod pl;

use crate::config::Config;
use crate::presentation::{ColorAssigner, PaletteColorAssigner};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub colors: Arc<dyn ColorAssigner>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let colors: Arc<dyn ColorAssigner> = Arc::new(PaletteColorAssigner::with_capacity(
            config.token_palette.clone(),
            config.color_capacity,
        ));
        Self { config, colors }
    }

    pub fn with_colors(config: Config, colors: Arc<dyn ColorAssigner>) -> Self {
        Self { config, colors }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = DefaultBodyLimit::max(state.config.max_input_bytes);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/calculate", post(calculate::post_calculate))
        .route("/v1/pl", post(pl::post_pl))
        .layer(body_limit)
        .layer(cors)
        .with_state(state)
}
