//! Health check handler

use axum::{extract::State, response::Json};
use chrono::Utc;

use curator::KvCache;
use crate::state::DashboardState;
use crate::types::HealthResponse;

pub async fn health_check<C>(State(state): State<DashboardState<C>>) -> Json<HealthResponse>
where
    C: KvCache + 'static,
{
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
