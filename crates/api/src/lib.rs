//! `api` crate — HTTP REST layer over the workflow store.
//!
//! Exposes:
//!   GET    /api/v1/workflows
//!   POST   /api/v1/workflows
//!   GET    /api/v1/workflows/{id}
//!   PUT    /api/v1/workflows/{id}
//!   DELETE /api/v1/workflows/{id}
//!   PUT    /api/v1/workflows/{id}/status
//!   GET    /api/v1/workflows/{id}/summary
//!
//! The store itself is synchronous; this layer is the multi-threaded host,
//! so the single store instance sits behind a mutex and every handler does
//! one lock, one store call, one unlock.

mod handlers;
pub mod seed;

use std::sync::{Arc, Mutex};

use axum::routing::{get, put};
use axum::Router;
use store::MemoryStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state: the one in-process store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<MemoryStore>>,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/workflows",
            get(handlers::workflows::list).post(handlers::workflows::create),
        )
        .route(
            "/api/v1/workflows/:id",
            get(handlers::workflows::get)
                .put(handlers::workflows::update)
                .delete(handlers::workflows::delete),
        )
        .route(
            "/api/v1/workflows/:id/status",
            put(handlers::workflows::set_status),
        )
        .route(
            "/api/v1/workflows/:id/summary",
            get(handlers::workflows::summary),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(bind: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
