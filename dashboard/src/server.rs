//! HTTP server wiring
//!
//! Builds the axum router over a [`DashboardState`] and serves it until the
//! shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use curator::KvCache;
use crate::error::{DashboardError, DashboardResult};
use crate::state::DashboardState;
use crate::web::handlers::{art, health};

pub struct DashboardServer<C>
where
    C: KvCache,
{
    state: DashboardState<C>,
    bind_address: SocketAddr,
}

impl<C> DashboardServer<C>
where
    C: KvCache + 'static,
{
    pub fn new(state: DashboardState<C>, bind_address: SocketAddr) -> Self {
        Self { state, bind_address }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> DashboardResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| DashboardError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e)))?;

        info!("🌐 Dashboard listening on http://{}", self.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DashboardError::ServerStartup(e.to_string()))
    }
}

/// Router over any cache implementation
pub fn build_router<C>(state: DashboardState<C>) -> Router
where
    C: KvCache + 'static,
{
    Router::new()
        .route("/api/art/current", get(art::current::<C>))
        .route("/api/art/orientation/:orientation", get(art::by_orientation::<C>))
        .route("/api/art/refresh", post(art::refresh::<C>))
        .route("/api/art/cache/clear", post(art::clear_cache::<C>))
        .route("/api/art/cache/stats", get(art::cache_stats::<C>))
        .route("/health", get(health::health_check::<C>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
