use axum::{ extract::State, Json };
use serde::Serialize;

use crate::db::DatabaseStats;
use crate::error::Result;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub database: bool,
    pub recent_activity: bool,
    pub operational: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let health = state.health.check().await;

    Json(HealthResponse {
        database: health.database,
        recent_activity: health.recent_activity,
        operational: health.operational(),
    })
}

pub async fn database_stats(State(state): State<AppState>) -> Result<Json<DatabaseStats>> {
    let stats = state.stats.database_stats().await?;

    Ok(Json(stats))
}
