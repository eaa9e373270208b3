pub mod cors;
pub mod error;
pub mod handlers;

use crate::config::CorsConfig;
use crate::core::pipeline::SolarPipeline;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SolarPipeline>,
}

impl AppState {
    pub fn new(pipeline: SolarPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Routes are registered once here and never change while serving.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/api/teste", get(handlers::health))
        .route(
            "/api/solar_cep/{cep}/{peakpower}",
            get(handlers::estimate_from_path),
        )
        .route("/api/solar_cep", post(handlers::estimate_from_body))
        .with_state(state)
        .layer(cors::build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
