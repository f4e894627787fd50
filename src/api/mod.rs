use std::sync::Arc;

use axum::{ routing::get, Router };
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod health;

use crate::db::StatsRepository;
use crate::services::HealthService;

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<StatsRepository>,
    pub health: Arc<HealthService>,
}

impl AppState {
    pub fn new(stats: Arc<StatsRepository>, health: Arc<HealthService>) -> Self {
        Self { stats, health }
    }
}

/// Operational HTTP surface: liveness and table counters.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/stats", get(health::database_stats))
        .with_state(state)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive())
        )
}
