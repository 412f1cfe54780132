//! Art rotation API handlers
//!
//! Core failures never become HTTP errors: callers get `200` with a null
//! artwork and a warning, so a display can keep showing its last image.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use curator::{resolve_display, CurrentSelection, KvCache, CacheStats, DISPLAY_TARGETS};
use crate::state::DashboardState;
use crate::types::{ArtQuery, ClearCacheResponse, OrientationResponse};

/// Current artwork for every display
pub async fn current<C>(
    State(state): State<DashboardState<C>>,
    Query(query): Query<ArtQuery>,
) -> Json<CurrentSelection>
where
    C: KvCache + 'static,
{
    Json(state.rotation.current(&query.filters()).await)
}

/// Current artwork for one display
pub async fn by_orientation<C>(
    State(state): State<DashboardState<C>>,
    Path(orientation): Path<String>,
    Query(query): Query<ArtQuery>,
) -> Json<OrientationResponse>
where
    C: KvCache + 'static,
{
    let orientation = resolve_display(&orientation, state.rotation.config());

    let response = match state.rotation.get_artwork(&orientation, &query.filters()).await {
        Ok(artwork) => OrientationResponse {
            orientation,
            artwork: Some(artwork),
            warning: false,
            error: None,
        },
        Err(e) => {
            warn!("No artwork for {}: {}", orientation, e);
            OrientationResponse {
                orientation,
                artwork: None,
                warning: true,
                error: Some(e.to_string()),
            }
        }
    };

    Json(response)
}

/// Rebuild pools for one display, or all of them
pub async fn refresh<C>(
    State(state): State<DashboardState<C>>,
    Query(query): Query<ArtQuery>,
) -> Result<Json<CurrentSelection>, (StatusCode, Json<Value>)>
where
    C: KvCache + 'static,
{
    let filters = query.filters();

    let Some(requested) = query.orientation.as_deref().map(|o| o.trim().to_lowercase()) else {
        return Ok(Json(state.rotation.refresh_all(&filters).await));
    };

    let Some(display) = DISPLAY_TARGETS.iter().find(|d| **d == requested) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("Unknown orientation '{}'", requested),
                "valid": DISPLAY_TARGETS,
            })),
        ));
    };

    let mut selection = CurrentSelection::default();
    selection.record(display, state.rotation.refresh(display, &filters).await);
    Ok(Json(selection))
}

/// Drop every art cache entry
pub async fn clear_cache<C>(State(state): State<DashboardState<C>>) -> Json<ClearCacheResponse>
where
    C: KvCache + 'static,
{
    let cleared = state.rotation.clear_cache().await;
    info!("🧹 Art cache cleared ({} keys)", cleared);

    Json(ClearCacheResponse {
        status: "cleared".to_string(),
        cleared,
    })
}

pub async fn cache_stats<C>(State(state): State<DashboardState<C>>) -> Json<CacheStats>
where
    C: KvCache + 'static,
{
    Json(state.rotation.cache_stats().await)
}
